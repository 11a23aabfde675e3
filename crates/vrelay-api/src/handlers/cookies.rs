//! Cookie submission handler.

use axum::extract::State;
use axum::http::StatusCode;
use tracing::{error, warn};

use vrelay_models::is_valid_cookies;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Receive a YouTube cookie export from the client and forward it to the
/// primary remote node. The remote node's status and body are mirrored
/// back unchanged.
pub async fn receive_youtube_cookies(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<(StatusCode, String)> {
    if !is_valid_cookies(&body) {
        error!("Invalid cookies received, maybe you haven't logged in yet, not forwarding.");
        return Err(ApiError::bad_request("Invalid cookies."));
    }

    let Some(relay) = &state.relay else {
        return Err(ApiError::service_unavailable("Remote server not configured."));
    };

    let result = relay.send_cookies(&body).await;
    if !result.success {
        warn!("Failed to forward cookies to remote server.");
    }

    Ok((result.status, result.body))
}
