/**
 * Development Token Handler
 *
 * `GET /api/test/generate-token` hands out a ready-made bearer token so the
 * query endpoint can be exercised by hand. Only available when the server
 * runs with `APP_ENV=development`.
 */

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::auth::handlers::types::TokenResponse;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Username baked into development tokens
pub const DEV_USERNAME: &str = "test-user-123";
/// Role baked into development tokens
pub const DEV_ROLE: &str = "admin";

/// Handle `GET /api/test/generate-token`
///
/// # Errors
///
/// * `404 Not Found` - outside development mode
/// * `500 Internal Server Error` - if signing fails
pub async fn generate_token(
    State(app_state): State<AppState>,
) -> Result<Json<TokenResponse>, BackendError> {
    if !app_state.config.dev_mode {
        return Err(BackendError::handler(StatusCode::NOT_FOUND, "Not available"));
    }

    let token = app_state.auth.issue(DEV_USERNAME, DEV_ROLE).map_err(|e| {
        tracing::error!("Failed to sign development token: {:?}", e);
        BackendError::state("Failed to sign token")
    })?;

    tracing::info!("Issued development token for {}", DEV_USERNAME);
    Ok(Json(TokenResponse { token }))
}
