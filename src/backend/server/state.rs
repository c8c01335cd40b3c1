/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is constructed once per process and cloned into every handler.
 * It holds:
 * - The message log (single shared instance)
 * - The broadcast hub for real-time peers
 * - The token verifier
 * - The notification sink
 * - The configuration it was built from
 *
 * # Thread Safety
 *
 * - `Arc<MessageLog>` serializes writers internally
 * - `BroadcastHub` is a cheap handle around a locked peer map
 * - `Arc<dyn NotificationSink>` is `Send + Sync`
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::JwtAuth;
use crate::backend::chat::log::MessageLog;
use crate::backend::notify::{MailNotifier, NotificationSink};
use crate::backend::realtime::BroadcastHub;
use crate::shared::AppConfig;

/// Application state shared by all handlers
///
/// # Usage
///
/// ```rust,no_run
/// use chatline::backend::server::state::AppState;
/// use axum::extract::State;
///
/// async fn handler(State(app_state): State<AppState>) {
///     let total = app_state.message_log.count();
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Configuration the state was built from
    pub config: Arc<AppConfig>,

    /// The single in-memory message log
    pub message_log: Arc<MessageLog>,

    /// Connected real-time peers
    pub hub: BroadcastHub,

    /// Bearer token verifier (and issuer for the development endpoint)
    pub auth: Arc<JwtAuth>,

    /// Side channel invoked after a message is accepted
    pub notifier: Arc<dyn NotificationSink>,
}

impl AppState {
    /// Build state with the default mail notifier
    pub fn new(config: AppConfig) -> Self {
        let notifier: Arc<dyn NotificationSink> = Arc::new(MailNotifier::new(config.notify_delay));
        Self::with_notifier(config, notifier)
    }

    /// Build state with a caller-supplied notification sink
    pub fn with_notifier(config: AppConfig, notifier: Arc<dyn NotificationSink>) -> Self {
        let message_log = Arc::new(MessageLog::new());
        let hub = BroadcastHub::new(
            Arc::clone(&message_log),
            Arc::clone(&notifier),
            config.notify_timeout,
        );
        let auth = Arc::new(JwtAuth::new(&config.jwt_secret, config.jwt_expires_in));

        Self {
            config: Arc::new(config),
            message_log,
            hub,
            auth,
            notifier,
        }
    }
}

impl FromRef<AppState> for BroadcastHub {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hub.clone()
    }
}
