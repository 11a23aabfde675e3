//! Video resolution handler.
//!
//! The boundary of the relay: query extraction, blocklist rewrite,
//! classification, then either a bypass signal (empty 200 body, the client
//! fetches the URL itself) or remote dispatch for YouTube URLs.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info, warn};

use vrelay_models::{classify, UrlType, VideoRequest};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GetVideoParams {
    url: Option<String>,
    avpro: Option<String>,
    source: Option<String>,
}

/// Resolve a video URL for the VR client.
///
/// An empty 200 body is the explicit "fetch it yourself" signal; it is
/// produced for non-YouTube URLs, for URLs no classifier recognizes, and
/// (when local fallback is configured) after remote exhaustion.
pub async fn get_video(
    State(state): State<AppState>,
    Query(params): Query<GetVideoParams>,
) -> Response {
    let avpro = params
        .avpro
        .as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    let source = params.source.unwrap_or_else(|| "vrchat".to_string());
    let request = VideoRequest::new(params.url.as_deref().unwrap_or_default(), avpro, source);

    if request.is_empty() {
        error!("No URL provided.");
        return "No URL provided.".into_response();
    }

    info!("Request URL: {}", request.raw_url);

    let url: &str = if state.policy.is_blocked(&request.raw_url) {
        warn!("URL is blocked: {}", request.raw_url);
        state.policy.apply(&request.raw_url)
    } else {
        &request.raw_url
    };

    let Some(video) = classify(url) else {
        info!("No handler for URL: {}", url);
        return ().into_response();
    };

    if video.url_type != UrlType::YouTube {
        info!("Non-YouTube URL, bypassing: {}", video.canonical_url);
        return ().into_response();
    }

    let Some(relay) = &state.relay else {
        error!("Remote server not configured for YouTube resolution.");
        return ApiError::service_unavailable("Remote server not configured.").into_response();
    };

    let result = relay
        .resolve_video(&video.canonical_url, request.use_avpro, &request.source)
        .await;

    if result.success {
        info!("Responding with remote URL: {}", result.body);
        return result.body.into_response();
    }

    if state.config.fallback_to_local {
        warn!("All remote nodes failed, signalling local fallback.");
        return ().into_response();
    }

    error!("All remote nodes failed to resolve URL: {}", video.canonical_url);
    (result.status, result.body).into_response()
}
