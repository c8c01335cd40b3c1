//! Server Module
//!
//! Server initialization and shared state.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - Application construction
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration loading
//! └── init.rs         - App creation
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use state::AppState;
pub use config::load_config;
pub use init::{create_app, create_app_with_state};
