/**
 * Add Message Handler
 *
 * `POST /api/add-message` appends one message to the log and kicks off a
 * notification. `GET /api/add-message` lists the whole log unfiltered.
 *
 * # Request Body
 *
 * ```json
 * { "user": "alice", "message": "hello" }
 * ```
 *
 * Absent, `null` and empty-string fields are all rejected with
 * `User and message are required`. A body that is not a JSON object with
 * string fields is rejected with `Invalid request`.
 */

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::notify;
use crate::backend::server::state::AppState;
use crate::shared::Message;

#[derive(Debug, Default, Deserialize)]
pub struct AddMessageRequest {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageResponse {
    pub success: bool,
    pub data: Message,
    pub total_messages: usize,
}

#[derive(Debug, Serialize)]
pub struct ListMessagesResponse {
    pub success: bool,
    pub data: Vec<Message>,
    pub count: usize,
}

/// Handle `POST /api/add-message`
///
/// # Errors
///
/// * `400 Bad Request` - missing/empty field, or malformed body
/// * `401 Unauthorized` - from the auth layer when it is mounted
///
/// The notification is dispatched after the response is built and never
/// affects it.
pub async fn add_message(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddMessageResponse>), BackendError> {
    let request: AddMessageRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("[Chat] Rejecting add-message body: {}", e);
        BackendError::malformed(e.to_string())
    })?;

    let message = app_state.message_log.append(
        request.user.unwrap_or_default(),
        request.message.unwrap_or_default(),
    )?;
    let total_messages = app_state.message_log.count();

    tracing::info!(
        "[Chat] Message {} added by {} ({} total)",
        message.id,
        message.user,
        total_messages
    );

    notify::dispatch(
        &app_state.notifier,
        message.user.clone(),
        message.body.clone(),
        app_state.config.notify_timeout,
    );

    Ok((
        StatusCode::CREATED,
        Json(AddMessageResponse {
            success: true,
            data: message,
            total_messages,
        }),
    ))
}

/// Handle `GET /api/add-message`
pub async fn list_messages(State(app_state): State<AppState>) -> Json<ListMessagesResponse> {
    let data = app_state.message_log.snapshot();
    Json(ListMessagesResponse {
        success: true,
        count: data.len(),
        data,
    })
}
