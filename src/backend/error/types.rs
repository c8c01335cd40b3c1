/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers. Each
 * variant maps to a status code and a client-facing message.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Missing or empty `user` / `message` → 400
 * - `page` / `limit` below 1 or not an integer → 400
 * - Unparseable request body → 400
 * - Missing or invalid bearer token → 401
 *
 * ## Server Errors
 *
 * - State errors (e.g., token signing) → 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::AuthError;
use crate::shared::SharedError;

/// Client-facing message for an unparseable payload
pub const INVALID_REQUEST: &str = "Invalid request";

/// Client-facing message for bad pagination parameters
pub const INVALID_PAGINATION: &str = "Page and limit must be greater than 0";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use chatline::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Not found");
/// let err = BackendError::malformed("expected JSON object");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// State management error
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Request body could not be parsed
    ///
    /// `detail` is logged; clients only ever see `INVALID_REQUEST`.
    #[error("Malformed request: {detail}")]
    MalformedRequest { detail: String },

    /// Missing or invalid credentials
    #[error(transparent)]
    AuthError(#[from] AuthError),

    /// Validation and pagination errors from the core
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Create a new malformed-request error
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedRequest {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `StateError` - 500 Internal Server Error
    /// - `MalformedRequest` - 400 Bad Request
    /// - `AuthError` - 401 Unauthorized
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            Self::AuthError(_) => StatusCode::UNAUTHORIZED,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StateError { message } => message.clone(),
            Self::MalformedRequest { .. } => INVALID_REQUEST.to_string(),
            Self::AuthError(err) => err.to_string(),
            Self::SharedError(err) => match err {
                SharedError::ValidationError { message, .. } => message.clone(),
                SharedError::InvalidPagination { .. } => INVALID_PAGINATION.to_string(),
            },
        }
    }
}
