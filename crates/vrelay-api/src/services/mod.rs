//! Backend services.

pub mod relay;

pub use relay::{RelayClient, RelayResponse, RemoteNode};
