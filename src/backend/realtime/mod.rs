//! Real-time Module
//!
//! Live fanout of chat messages to connected WebSocket peers.
//!
//! # Architecture
//!
//! - **`hub`** - The `BroadcastHub`: peer registry, message acceptance and
//!   fanout
//! - **`socket`** - WebSocket upgrade handler and per-connection tasks
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs     - Module exports and documentation
//! ├── hub.rs     - Peer registry and fanout
//! └── socket.rs  - WebSocket transport
//! ```
//!
//! # Protocol
//!
//! Frames are JSON objects with `event` and `data` keys; see
//! `shared::event` for the full set.

/// Peer registry and fanout
pub mod hub;

/// WebSocket transport
pub mod socket;

pub use hub::{BroadcastHub, PeerId, PeerReceiver};
pub use socket::handle_socket_upgrade;
