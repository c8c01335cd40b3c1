/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Chat routes (REST + WebSocket)
 * 2. API routes (development token)
 * 3. Fallback handler (404 JSON)
 *
 * # Layers
 *
 * Every request passes through `TraceLayer` and a permissive `CorsLayer`.
 */

use axum::{http::StatusCode, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_chat_routes(Router::new(), &app_state);
    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not found")
}
