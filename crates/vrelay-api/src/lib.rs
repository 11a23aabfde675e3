//! Axum HTTP relay server.
//!
//! This crate provides:
//! - The local HTTP surface the VR client talks to (`/getvideo`,
//!   `/youtube-cookies`)
//! - Blocklist + classification orchestration at the boundary
//! - Remote node dispatch with ordered fallback and per-node timeouts

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{RelayClient, RelayResponse, RemoteNode};
pub use state::AppState;
