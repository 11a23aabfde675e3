//! Blocklist policy.

use serde::{Deserialize, Serialize};

/// Ordered prefix blocklist with a single redirect target.
///
/// Evaluated once per request, before classification, so a blocked URL is
/// fully replaced before any dispatch decision. The redirect target itself
/// is never re-matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocklistPolicy {
    prefixes: Vec<String>,
    redirect: String,
}

impl BlocklistPolicy {
    pub fn new(prefixes: Vec<String>, redirect: impl Into<String>) -> Self {
        Self {
            prefixes,
            redirect: redirect.into(),
        }
    }

    /// Rewrite `url` to the redirect target if any configured prefix
    /// matches, in declaration order. First match wins.
    pub fn apply<'a>(&'a self, url: &'a str) -> &'a str {
        if self.prefixes.iter().any(|p| url.starts_with(p.as_str())) {
            &self.redirect
        } else {
            url
        }
    }

    /// True when `url` would be rewritten.
    pub fn is_blocked(&self, url: &str) -> bool {
        self.prefixes.iter().any(|p| url.starts_with(p.as_str()))
    }
}
