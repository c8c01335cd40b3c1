//! Chatline - Main Library
//!
//! An in-memory chat backend: messages arrive over REST or a WebSocket,
//! land in a single append-only log, and are fanned out live to every
//! connected socket.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used on both sides of the wire
//!   - `Message`, socket event frames, configuration, shared errors
//!
//! - **`backend`** - The Axum server
//!   - Message log and query engine
//!   - Broadcast hub and WebSocket transport
//!   - Bearer-token auth, notifications, routing
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatline::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let addr = config.bind_address();
//! let app = create_app(config);
//! let listener = tokio::net::TcpListener::bind(addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - The message log is an `RwLock<Vec<_>>`; ids are assigned under the
//!   write lock
//! - The hub keeps one bounded `mpsc` sender per peer behind a `Mutex`;
//!   a peer that stops reading is dropped once its queue is full
//! - Everything in `AppState` is `Send + Sync` and cheap to clone

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
