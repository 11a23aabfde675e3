//! Request handlers.

pub mod cookies;
pub mod health;
pub mod video;

pub use cookies::*;
pub use health::*;
pub use video::*;
