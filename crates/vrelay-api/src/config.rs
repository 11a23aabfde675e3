//! API configuration.

use std::time::Duration;

/// Relay server configuration. Read once at startup and treated as
/// immutable afterwards; every component receives it by value or reference
/// rather than reading ambient state.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
    /// Remote resolution nodes, tried strictly in this order
    pub remote_nodes: Vec<String>,
    /// Per-node timeout for remote calls
    pub remote_timeout: Duration,
    /// Answer with a bypass signal instead of a failure when every remote
    /// node fails, letting the client resolve locally
    pub fallback_to_local: bool,
    /// URL prefixes to block
    pub blocked_urls: Vec<String>,
    /// Redirect target for blocked URLs
    pub block_redirect: String,
    /// Max request body size
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9696,
            remote_nodes: Vec::new(),
            remote_timeout: Duration::from_secs(15),
            fallback_to_local: false,
            blocked_urls: Vec::new(),
            block_redirect: "https://www.youtube.com/watch?v=byv2bKekeWQ".to_string(),
            max_body_size: 1024 * 1024, // 1MB, cookie exports are small
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("VRELAY_HOST").unwrap_or(defaults.host),
            port: std::env::var("VRELAY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            remote_nodes: std::env::var("REMOTE_NODE_URLS")
                .map(|s| parse_node_list(&s))
                .unwrap_or_default(),
            remote_timeout: Duration::from_secs(
                std::env::var("REMOTE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
            ),
            fallback_to_local: std::env::var("REMOTE_FALLBACK_TO_LOCAL")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            blocked_urls: std::env::var("BLOCKED_URLS")
                .map(|s| parse_list(&s))
                .unwrap_or_default(),
            block_redirect: std::env::var("BLOCK_REDIRECT").unwrap_or(defaults.block_redirect),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
        }
    }

    /// True when at least one remote node is configured.
    pub fn remote_configured(&self) -> bool {
        !self.remote_nodes.is_empty()
    }
}

fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Node URLs additionally lose any trailing slash so path joins stay
/// predictable.
fn parse_node_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .collect()
}
