//! Common test utilities and helpers
//!
//! - App construction around a fresh in-memory log
//! - Request builders and JSON response decoding
//! - Token helpers

pub mod auth_helpers;
pub mod server;

pub use auth_helpers::*;
pub use http::*;
pub use server::*;
