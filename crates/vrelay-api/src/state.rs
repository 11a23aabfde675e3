//! Application state.

use std::sync::Arc;

use vrelay_models::BlocklistPolicy;

use crate::config::ApiConfig;
use crate::services::RelayClient;

/// Shared application state. Built once at startup; nothing in it is
/// mutated during request handling.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub policy: Arc<BlocklistPolicy>,
    /// `None` when no remote node is configured; handlers surface 503
    /// on paths that require one.
    pub relay: Option<Arc<RelayClient>>,
}

impl AppState {
    /// Create new application state from loaded configuration.
    pub fn new(config: ApiConfig) -> Self {
        let policy = BlocklistPolicy::new(config.blocked_urls.clone(), config.block_redirect.clone());
        let relay = RelayClient::from_config(&config).map(Arc::new);

        Self {
            config: Arc::new(config),
            policy: Arc::new(policy),
            relay,
        }
    }
}
