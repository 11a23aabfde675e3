//! Request and classification data types.

use serde::{Deserialize, Serialize};

/// Provenance of a requested video URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlType {
    /// YouTube host family; resolution goes through a remote node.
    YouTube,
    /// Any other recognized source; the client fetches it directly.
    Other,
}

/// Result of classifying a single URL. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub url_type: UrlType,
    /// Alias-normalized form of the requested URL.
    pub canonical_url: String,
}

/// An inbound video request, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRequest {
    /// Sanitized request URL (trimmed, double quotes percent-escaped).
    pub raw_url: String,
    /// Whether the client is on the AvPro playback path. Forwarded to the
    /// remote node, which shapes the resolved URL accordingly.
    pub use_avpro: bool,
    /// Identifier of the requesting client application.
    pub source: String,
}

impl VideoRequest {
    /// Build a request from untrusted query input. Double quotes are
    /// escaped before the URL touches anything downstream.
    pub fn new(raw_url: &str, use_avpro: bool, source: impl Into<String>) -> Self {
        Self {
            raw_url: raw_url.trim().replace('"', "%22"),
            use_avpro,
            source: source.into(),
        }
    }

    /// True when no usable URL was supplied.
    pub fn is_empty(&self) -> bool {
        self.raw_url.is_empty()
    }
}
