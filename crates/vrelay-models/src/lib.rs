//! Domain logic for the vrelay video request relay.
//!
//! This crate provides the pure, I/O-free pieces of the relay:
//! - URL classification and alias normalization
//! - Blocklist policy (ordered prefix rewrite)
//! - Cookie blob validation
//! - Request/info data types

pub mod classify;
pub mod cookies;
pub mod policy;
pub mod request;

// Re-export common types
pub use classify::classify;
pub use cookies::is_valid_cookies;
pub use policy::BlocklistPolicy;
pub use request::{UrlType, VideoInfo, VideoRequest};
