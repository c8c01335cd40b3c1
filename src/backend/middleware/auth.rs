/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * a bearer token. It verifies the token from the Authorization header and
 * attaches the caller's identity to the request.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::{bearer_token, AuthError};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated caller extracted from the bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it
/// 3. Attaches the caller to request extensions for use in handlers
///
/// Returns 401 with `Unauthorized - Missing token` or
/// `Unauthorized - Invalid or expired token`.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let claims = {
        let header = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = bearer_token(header).inspect_err(|_| {
            tracing::warn!("Missing bearer token on {}", request.uri().path());
        })?;

        app_state.auth.authenticate(token).inspect_err(|_| {
            tracing::warn!("Invalid token on {}", request.uri().path());
        })?
    };

    request.extensions_mut().insert(AuthenticatedUser {
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Only usable on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::from(AuthError::MissingToken)
            })?;

        Ok(AuthUser(user))
    }
}
