//! Authentication Module
//!
//! Bearer-token authentication for the query endpoint (and, when enabled,
//! the add-message endpoint).
//!
//! # Architecture
//!
//! - **`sessions`** - JWT issuing and verification, `Authorization` header
//!   parsing
//! - **`handlers`** - HTTP handlers for token endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     └── token.rs    - Development token handler
//! ```
//!
//! # Security
//!
//! - Tokens are HS256-signed with `JWT_SECRET`
//! - Tokens expire after `JWT_EXPIRES_IN` seconds (one hour by default)
//! - Missing and invalid credentials are both 401, with distinct messages

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use sessions::{bearer_token, AuthError, Claims, JwtAuth};
pub use handlers::{generate_token, TokenResponse};
