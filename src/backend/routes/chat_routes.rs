/**
 * Chat Route Configuration
 *
 * # Routes
 *
 * - `POST /api/add-message` - Append a message (auth per `REQUIRE_AUTH_ON_ADD`)
 * - `GET /api/add-message` - List the whole log (same auth policy)
 * - `GET /api/messages` - Filtered, paginated query (always authenticated)
 * - `GET /ws` - WebSocket upgrade for real-time peers (unauthenticated)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::chat::handlers::{add_message, get_messages, list_messages};
use crate::backend::middleware::auth_middleware;
use crate::backend::realtime::handle_socket_upgrade;
use crate::backend::server::state::AppState;

/// Add the chat routes to `router`
///
/// The auth layer is attached with `route_layer`, so it only runs for
/// requests that actually match a protected route.
pub fn configure_chat_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let append = Router::new().route(
        "/api/add-message",
        post(add_message).get(list_messages),
    );
    let append = if app_state.config.require_auth_on_add {
        append.route_layer(from_fn_with_state(app_state.clone(), auth_middleware))
    } else {
        tracing::warn!("[Routes] /api/add-message is mounted without authentication");
        append
    };

    let query = Router::new()
        .route("/api/messages", get(get_messages))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .merge(append)
        .merge(query)
        .route("/ws", get(handle_socket_upgrade))
}
