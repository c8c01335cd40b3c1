//! Backend Module
//!
//! All server-side code: the Axum application, the in-memory message log,
//! and the WebSocket broadcast hub.
//!
//! # Architecture
//!
//! - **`server`** - Application state, configuration loading, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`chat`** - Message log, query engine, REST handlers
//! - **`realtime`** - WebSocket peers and fanout
//! - **`notify`** - Fire-and-forget notification sink
//! - **`auth`** - Bearer token issuing and verification
//! - **`middleware`** - Authentication middleware and extractor
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── chat/           - Message log, queries and handlers
//! ├── realtime/       - WebSocket hub
//! ├── notify/         - Notification sink
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Message storage and REST handlers
pub mod chat;

/// Real-time broadcast system
pub mod realtime;

/// Post-acceptance notifications
pub mod notify;

/// Backend error types
pub mod error;

/// Authentication
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use chat::MessageLog;
pub use error::BackendError;
pub use realtime::BroadcastHub;
pub use server::{create_app, create_app_with_state, AppState};
