/**
 * Message Log
 *
 * Append-only, in-memory record of every accepted message. The log assigns
 * ids (1-based, gap-free) and acceptance timestamps.
 *
 * # Concurrency
 *
 * Id assignment and insertion happen under a single write lock, so
 * concurrent appends never share an id and never leave gaps. Readers take
 * the read lock and clone out a snapshot, which means a reader sees an
 * entry only once its append has returned the lock.
 */
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::shared::{Message, SharedError};

/// Error message for a missing `user` or `message`
pub const REQUIRED_FIELDS: &str = "User and message are required";

#[derive(Debug, Default)]
pub struct MessageLog {
    entries: RwLock<Vec<Message>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, assigning the next id and the current time
    ///
    /// Only the empty string is rejected; whitespace-only values are
    /// accepted as-is.
    ///
    /// # Errors
    ///
    /// `SharedError::ValidationError` if `user` or `body` is empty.
    pub fn append(
        &self,
        user: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Message, SharedError> {
        let user = user.into();
        let body = body.into();

        if user.is_empty() {
            return Err(SharedError::validation("user", REQUIRED_FIELDS));
        }
        if body.is_empty() {
            return Err(SharedError::validation("message", REQUIRED_FIELDS));
        }

        let mut entries = self.write();
        let id = entries.len() as u64 + 1;
        let message = Message::new(id, user, body, Utc::now());
        entries.push(message.clone());
        drop(entries);

        tracing::debug!(id, user = %message.user, "Appended message to log");
        Ok(message)
    }

    /// All messages in append order
    pub fn snapshot(&self) -> Vec<Message> {
        self.read().clone()
    }

    /// Total messages ever appended
    pub fn count(&self) -> usize {
        self.read().len()
    }

    // A panic while holding the lock cannot leave a half-written entry
    // (push is the last step), so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Message>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Message>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
