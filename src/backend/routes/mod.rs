//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers, fallback
//! ├── chat_routes.rs  - Message and WebSocket routes
//! └── api_routes.rs   - Auxiliary API routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use chatline::backend::routes::create_router;
//! use chatline::backend::server::state::AppState;
//! use chatline::shared::AppConfig;
//!
//! let router = create_router(AppState::new(AppConfig::default()));
//! ```

/// Main router creation
pub mod router;

/// Chat-related routes
pub mod chat_routes;

/// Auxiliary API routes
pub mod api_routes;

pub use router::create_router;
