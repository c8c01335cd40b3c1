//! Chat Backend Module
//!
//! Server-side message storage and the REST handlers over it.
//!
//! # Architecture
//!
//! - **`log`** - Append-only, in-memory message log with sequential ids
//! - **`query`** - Filtering and pagination over a log snapshot
//! - **`handlers`** - Axum handlers for `/api/add-message` and `/api/messages`
//!
//! Messages live only in memory and are lost on restart.
//!
//! # Example
//!
//! ```rust
//! use chatline::backend::chat::log::MessageLog;
//!
//! let log = MessageLog::new();
//! let first = log.append("alice", "hello").unwrap();
//! assert_eq!(first.id, 1);
//! ```

/// Message storage
pub mod log;

/// Filter and pagination engine
pub mod query;

/// REST handlers
pub mod handlers;

pub use log::MessageLog;
pub use query::{query, FilterCriteria, Pagination, PaginationParams, QueryPage};
