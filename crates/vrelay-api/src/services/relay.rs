//! Remote node dispatch.
//!
//! The relay client owns the ordered list of configured remote resolution
//! nodes and implements two operations against them: resolving a YouTube
//! URL (ordered fallback across all nodes) and forwarding a cookie blob
//! (primary node only). Each call is independent; no health state is kept
//! between requests.

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::Client;
use tracing::{info, warn};

use crate::config::ApiConfig;

/// A configured remote resolution node.
#[derive(Debug, Clone)]
pub struct RemoteNode {
    pub base_url: String,
    pub timeout: Duration,
}

/// Outcome of a dispatch operation, mirrored onto the local response.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub success: bool,
    pub status: StatusCode,
    pub body: String,
}

impl RelayResponse {
    fn ok(body: String) -> Self {
        Self {
            success: true,
            status: StatusCode::OK,
            body,
        }
    }

    fn failed(status: StatusCode, body: String) -> Self {
        Self {
            success: false,
            status,
            body,
        }
    }
}

/// Client for the configured remote nodes.
pub struct RelayClient {
    nodes: Vec<RemoteNode>,
    http: Client,
}

impl RelayClient {
    /// Build a client over an ordered node list. Timeouts are enforced
    /// per call, not on the client itself.
    pub fn new(nodes: Vec<RemoteNode>) -> Self {
        Self {
            nodes,
            http: Client::new(),
        }
    }

    /// Build from config; `None` when no node is configured, so callers
    /// surface 503 without attempting a network call.
    pub fn from_config(config: &ApiConfig) -> Option<Self> {
        if config.remote_nodes.is_empty() {
            return None;
        }
        let nodes = config
            .remote_nodes
            .iter()
            .map(|base_url| RemoteNode {
                base_url: base_url.clone(),
                timeout: config.remote_timeout,
            })
            .collect();
        Some(Self::new(nodes))
    }

    /// Forward a validated cookie blob to the primary node.
    pub async fn send_cookies(&self, cookies: &str) -> RelayResponse {
        let Some(node) = self.nodes.first() else {
            return RelayResponse::failed(
                StatusCode::SERVICE_UNAVAILABLE,
                "Remote server not configured.".to_string(),
            );
        };

        let result = self
            .http
            .post(format!("{}/api/youtube-cookies", node.base_url))
            .body(cookies.to_string())
            .timeout(node.timeout)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = local_status(response.status());
                let body = response.text().await.unwrap_or_default();
                if status.is_success() {
                    info!("Forwarded cookies to {}", node.base_url);
                    RelayResponse::ok(body)
                } else {
                    warn!("Cookie forward to {} failed: {}", node.base_url, status);
                    RelayResponse::failed(status, body)
                }
            }
            Err(e) => {
                warn!("Cookie forward to {} failed: {}", node.base_url, e);
                RelayResponse::failed(
                    StatusCode::BAD_GATEWAY,
                    format!("Failed to reach remote node: {e}"),
                )
            }
        }
    }

    /// Resolve a YouTube URL through the configured nodes, strictly in
    /// order, one at a time. The first 2xx answer wins. Timeouts, connect
    /// errors, and non-2xx statuses all fall through to the next node; the
    /// last observed failure is reported when every node is exhausted, so
    /// a definitive content error is never silently swallowed.
    pub async fn resolve_video(&self, url: &str, avpro: bool, source: &str) -> RelayResponse {
        let mut last_failure: Option<(StatusCode, String)> = None;

        for node in &self.nodes {
            info!("Trying remote node: {}", node.base_url);

            let result = self
                .http
                .get(format!("{}/api/getvideo", node.base_url))
                .query(&[
                    ("url", url),
                    ("avpro", if avpro { "true" } else { "false" }),
                    ("source", source),
                ])
                .timeout(node.timeout)
                .send()
                .await;

            match result {
                Ok(response) => {
                    let status = local_status(response.status());
                    let body = response.text().await.unwrap_or_default();
                    if status.is_success() {
                        info!("Node {} resolved URL", node.base_url);
                        return RelayResponse::ok(body);
                    }
                    warn!("Node {} answered {}: {}", node.base_url, status, body);
                    last_failure = Some((status, body));
                }
                Err(e) if e.is_timeout() => {
                    warn!("Node {} timed out after {:?}", node.base_url, node.timeout);
                    last_failure = Some((
                        StatusCode::GATEWAY_TIMEOUT,
                        format!("Remote node {} timed out", node.base_url),
                    ));
                }
                Err(e) => {
                    warn!("Node {} unreachable: {}", node.base_url, e);
                    last_failure = Some((
                        StatusCode::BAD_GATEWAY,
                        format!("Remote node {} unreachable: {e}", node.base_url),
                    ));
                }
            }
        }

        let (status, body) = last_failure.unwrap_or((
            StatusCode::BAD_GATEWAY,
            "No remote node configured.".to_string(),
        ));
        RelayResponse::failed(status, format!("All remote nodes failed: {body}"))
    }
}

/// Map an upstream status onto the local response type. Statuses reqwest
/// produced are always valid, so the fallback arm is unreachable in
/// practice.
fn local_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn node(base_url: String, timeout_ms: u64) -> RemoteNode {
        RemoteNode {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let first = MockServer::start().await;
        let second = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/getvideo"))
            .and(query_param("url", "https://youtube.com/watch?v=abc"))
            .and(query_param("avpro", "false"))
            .and(query_param("source", "vrchat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("https://cached/abc.mp4"))
            .expect(1)
            .mount(&first)
            .await;
        // Second node must never be contacted.
        Mock::given(method("GET"))
            .and(path("/api/getvideo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("unexpected"))
            .expect(0)
            .mount(&second)
            .await;

        let client = RelayClient::new(vec![node(first.uri(), 1000), node(second.uri(), 1000)]);
        let out = client
            .resolve_video("https://youtube.com/watch?v=abc", false, "vrchat")
            .await;

        assert!(out.success);
        assert_eq!(out.status, StatusCode::OK);
        assert_eq!(out.body, "https://cached/abc.mp4");
    }

    #[tokio::test]
    async fn test_fallback_tries_nodes_in_order() {
        let first = MockServer::start().await;
        let second = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/getvideo"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/getvideo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("https://cached/x.mp4"))
            .expect(1)
            .mount(&second)
            .await;

        let client = RelayClient::new(vec![node(first.uri(), 1000), node(second.uri(), 1000)]);
        let out = client
            .resolve_video("https://youtube.com/watch?v=x", true, "vrchat")
            .await;

        assert!(out.success);
        assert_eq!(out.body, "https://cached/x.mp4");
    }

    #[tokio::test]
    async fn test_timeout_counts_as_failed_attempt() {
        let slow = MockServer::start().await;
        let fast = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/getvideo"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("too late")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&slow)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/getvideo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("https://cached/y.mp4"))
            .expect(1)
            .mount(&fast)
            .await;

        let client = RelayClient::new(vec![node(slow.uri(), 50), node(fast.uri(), 1000)]);
        let out = client
            .resolve_video("https://youtube.com/watch?v=y", false, "vrchat")
            .await;

        assert!(out.success);
        assert_eq!(out.body, "https://cached/y.mp4");
    }

    #[tokio::test]
    async fn test_exhaustion_reports_last_failure() {
        let first = MockServer::start().await;
        let second = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/getvideo"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/getvideo"))
            .respond_with(ResponseTemplate::new(404).set_body_string("video not found"))
            .expect(1)
            .mount(&second)
            .await;

        let client = RelayClient::new(vec![node(first.uri(), 1000), node(second.uri(), 1000)]);
        let out = client
            .resolve_video("https://youtube.com/watch?v=gone", false, "vrchat")
            .await;

        assert!(!out.success);
        assert_eq!(out.status, StatusCode::NOT_FOUND);
        assert!(out.body.contains("video not found"));
    }

    #[tokio::test]
    async fn test_cookies_go_to_primary_node_only() {
        let primary = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/youtube-cookies"))
            .respond_with(ResponseTemplate::new(200).set_body_string("saved"))
            .expect(1)
            .mount(&primary)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/youtube-cookies"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&secondary)
            .await;

        let client = RelayClient::new(vec![node(primary.uri(), 1000), node(secondary.uri(), 1000)]);
        let out = client.send_cookies("youtube.com LOGIN_INFO blob").await;

        assert!(out.success);
        assert_eq!(out.body, "saved");
    }
}
