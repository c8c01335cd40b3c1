/**
 * Message Data Structure
 *
 * This module defines the Message struct stored by the message log and
 * returned by the query endpoints.
 *
 * Messages are created only by `MessageLog::append`, which assigns the id
 * and the acceptance timestamp. They are immutable afterwards.
 *
 * # Wire Format
 *
 * ```json
 * {"id":1,"user":"Alice","message":"Hello","timestamp":"2024-01-01T00:00:00.000Z"}
 * ```
 */
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A single chat line accepted into the log
///
/// # Fields
/// * `id` - Sequential identifier assigned by the log (1-based, gap-free)
/// * `user` - Sender name as submitted
/// * `body` - Message content, serialized as `message`
/// * `created_at` - Moment of acceptance, serialized as `timestamp`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Sequential log id
    pub id: u64,
    /// The sender
    pub user: String,
    /// The message text content
    #[serde(rename = "message")]
    pub body: String,
    /// Acceptance time (RFC3339, millisecond precision)
    #[serde(rename = "timestamp", serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Build a message with an explicit id and timestamp
    ///
    /// Only the log assigns ids; this is `pub(crate)` so nothing outside the
    /// crate can mint a message that never went through `append`.
    pub(crate) fn new(id: u64, user: String, body: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user,
            body,
            created_at,
        }
    }

    /// The acceptance timestamp as an ISO-8601 string
    pub fn timestamp(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// Format a timestamp the way every outbound payload carries it
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(at))
}
