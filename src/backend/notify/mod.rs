//! Notification Module
//!
//! Best-effort side channel invoked after a message is accepted. Delivery
//! runs on a detached task: the caller never waits for it, and a failure or
//! timeout is only logged.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::{sync::Arc, time::Duration};
//! use chatline::backend::notify::{dispatch, MailNotifier, NotificationSink};
//!
//! # async fn example() {
//! let sink: Arc<dyn NotificationSink> = Arc::new(MailNotifier::new(Duration::from_secs(1)));
//! dispatch(&sink, "alice", "hello", Duration::from_secs(5));
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Why a notification was not delivered
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notification failed: {0}")]
    Failed(String),
    #[error("notification timed out after {0:?}")]
    TimedOut(Duration),
}

/// Receiver of "message accepted" notifications
pub trait NotificationSink: Send + Sync + 'static {
    /// Deliver a notification for `body` sent by `user`
    fn notify(&self, user: String, body: String) -> BoxFuture<'static, Result<(), NotifyError>>;
}

/// Simulated mail delivery
///
/// Waits for the configured delay and then logs the mail that would have
/// been sent.
#[derive(Debug, Clone)]
pub struct MailNotifier {
    delay: Duration,
}

impl MailNotifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl NotificationSink for MailNotifier {
    fn notify(&self, user: String, body: String) -> BoxFuture<'static, Result<(), NotifyError>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            tracing::info!("email sent to {} with {}", user, body);
            Ok(())
        })
    }
}

/// Fire-and-forget delivery of one notification
///
/// Spawns onto the current tokio runtime and returns immediately. The
/// outcome is logged inside the task; the handle also yields it, but
/// production callers drop the handle.
pub fn dispatch(
    sink: &Arc<dyn NotificationSink>,
    user: impl Into<String>,
    body: impl Into<String>,
    timeout: Duration,
) -> JoinHandle<Result<(), NotifyError>> {
    let user = user.into();
    let pending = sink.notify(user.clone(), body.into());

    tokio::spawn(async move {
        let outcome = match tokio::time::timeout(timeout, pending).await {
            Ok(result) => result,
            Err(_) => Err(NotifyError::TimedOut(timeout)),
        };

        match &outcome {
            Ok(()) => tracing::debug!("[Notify] Notification delivered for {}", user),
            Err(e) => tracing::error!("[Notify] Error sending email to {}: {}", user, e),
        }
        outcome
    })
}
