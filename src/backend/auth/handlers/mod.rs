//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! └── token.rs    - Development token handler
//! ```
//!
//! # Handlers
//!
//! - **`generate_token`** - GET /api/test/generate-token - Development token

/// Request and response types
pub mod types;

/// Development token handler
pub mod token;

pub use types::TokenResponse;
pub use token::generate_token;
