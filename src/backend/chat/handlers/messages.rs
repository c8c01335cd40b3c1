/**
 * Message Query Handler
 *
 * `GET /api/messages?user=&message=&page=&limit=`
 *
 * Filters are case-insensitive substring matches ANDed together. Pagination
 * is validated before any filtering happens.
 */

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::chat::query::{query, FilterCriteria, PaginationParams, QueryPage};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Raw query string; numbers stay strings so bad input maps to our own error
#[derive(Debug, Default, Deserialize)]
pub struct MessagesQuery {
    pub user: Option<String>,
    pub message: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: QueryPage,
}

/// Handle `GET /api/messages`
///
/// # Errors
///
/// * `400 Bad Request` - `Page and limit must be greater than 0`
/// * `401 Unauthorized` - from the auth layer
pub async fn get_messages(
    State(app_state): State<AppState>,
    AuthUser(caller): AuthUser,
    params: Result<Query<MessagesQuery>, QueryRejection>,
) -> Result<Json<MessagesResponse>, BackendError> {
    let Query(params) = params.map_err(|e| BackendError::malformed(e.body_text()))?;

    let pagination = PaginationParams::parse(params.page.as_deref(), params.limit.as_deref())?;
    let filter = FilterCriteria::new(params.user, params.message);

    let snapshot = app_state.message_log.snapshot();
    let page = query(&snapshot, &filter, pagination)?;

    tracing::debug!(
        "[Chat] {} queried messages: {} of {} matches",
        caller.username,
        page.pagination.count,
        page.pagination.total
    );

    Ok(Json(MessagesResponse {
        success: true,
        page,
    }))
}
