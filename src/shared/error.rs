//! Shared Error Types
//!
//! This module defines error types raised by the framework-free core: the
//! message log and the query engine. The backend maps them onto HTTP
//! responses.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required field was empty
//! - `InvalidPagination` - `page` or `limit` below 1
//!
//! # Usage
//!
//! ```rust
//! use chatline::shared::error::SharedError;
//!
//! let error = SharedError::validation("user", "User and message are required");
//! ```
use thiserror::Error;

/// Errors raised by the message log and query engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Pagination parameters outside the accepted range
    #[error("Invalid pagination: {detail}")]
    InvalidPagination { detail: String },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new pagination error
    pub fn invalid_pagination(detail: impl Into<String>) -> Self {
        Self::InvalidPagination {
            detail: detail.into(),
        }
    }
}
