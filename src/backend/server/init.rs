/**
 * Server Initialization
 *
 * This module builds the application state and the router.
 *
 * # Initialization Process
 *
 * 1. Create the message log, broadcast hub, token verifier and notifier
 * 2. Create and configure the router
 *
 * The log lives exactly as long as the returned router (and the process
 * serving it); nothing is persisted.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Example
///
/// ```rust,no_run
/// use chatline::backend::server::create_app;
/// use chatline::shared::AppConfig;
///
/// # async fn example() {
/// let app = create_app(AppConfig::default());
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
/// axum::serve(listener, app).await.unwrap();
/// # }
/// ```
pub fn create_app(config: AppConfig) -> Router<()> {
    create_app_with_state(AppState::new(config))
}

/// Create the application around pre-built state
///
/// Lets callers keep a handle on the log and hub, or inject their own
/// notification sink.
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    tracing::info!(
        "Initializing chat backend (auth on add-message: {}, dev mode: {})",
        app_state.config.require_auth_on_add,
        app_state.config.dev_mode
    );

    let app = create_router(app_state);

    tracing::info!("Router configured");
    app
}
