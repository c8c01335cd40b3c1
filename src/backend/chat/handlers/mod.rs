//! Chat Handlers Module
//!
//! Axum handlers for the REST surface of the message log.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs         - Module exports
//! ├── add_message.rs - POST/GET /api/add-message
//! └── messages.rs    - GET /api/messages (filter + paginate)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{routing::{get, post}, Router};
//! use chatline::backend::chat::handlers::{add_message, get_messages, list_messages};
//!
//! let router = Router::new()
//!     .route("/api/add-message", post(add_message).get(list_messages))
//!     .route("/api/messages", get(get_messages));
//! ```

/// Append handler and unfiltered listing
pub mod add_message;

/// Filtered, paginated query handler
pub mod messages;

pub use add_message::{add_message, list_messages, AddMessageRequest, AddMessageResponse};
pub use messages::{get_messages, MessagesQuery, MessagesResponse};
