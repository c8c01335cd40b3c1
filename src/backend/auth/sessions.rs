/**
 * Session Tokens
 *
 * This module issues and verifies the HS256 bearer tokens that guard the
 * query endpoint.
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Why a request was not authenticated
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unauthorized - Missing token")]
    MissingToken,
    #[error("Unauthorized - Invalid or expired token")]
    InvalidToken,
}

/// Issues and verifies bearer tokens with a shared secret
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_in: Duration,
}

impl std::fmt::Debug for JwtAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuth")
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

impl JwtAuth {
    pub fn new(secret: &str, expires_in: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
        }
    }

    /// Create a token for `username` with `role`
    pub fn issue(&self, username: &str, role: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = unix_now();
        self.issue_claims(&Claims {
            username: username.to_string(),
            role: role.to_string(),
            exp: iat + self.expires_in.as_secs(),
            iat,
        })
    }

    /// Encode arbitrary claims, used when the caller controls `exp`
    pub fn issue_claims(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    /// Verify a token and return its claims
    ///
    /// Bad signatures, malformed tokens and expired tokens are all
    /// `AuthError::InvalidToken`.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {:?}", e);
                AuthError::InvalidToken
            })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value
///
/// A missing header, another scheme or an empty token all count as missing.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
