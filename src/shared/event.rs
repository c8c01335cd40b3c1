/**
 * Real-time Channel Events
 *
 * This module defines the JSON frames exchanged over the real-time channel.
 * Every frame is an object with an `event` name and a `data` payload:
 *
 * ```json
 * {"event":"send-message","data":"hello"}
 * {"event":"receive-message","data":{"id":1,"message":"hello","timestamp":"..."}}
 * {"event":"error","data":{"message":"Invalid request"}}
 * ```
 */
use serde::{Deserialize, Serialize};

use crate::shared::message::Message;

/// Frames a peer may send to the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Submit a chat line
    SendMessage(String),
}

/// Frames the server pushes to peers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// A message accepted from some peer, fanned out to everyone
    ReceiveMessage(Announcement),
    /// A channel-level failure affecting only the receiving peer
    Error(ErrorPayload),
}

/// Broadcast body for an accepted real-time message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Announcement {
    /// Log-assigned message id
    pub id: u64,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub message: String,
}

impl ServerEvent {
    /// Announce a message that was accepted into the log
    pub fn announce(message: &Message) -> Self {
        Self::ReceiveMessage(Announcement {
            id: message.id,
            message: message.body.clone(),
            timestamp: message.timestamp(),
        })
    }

    /// Create an error event
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorPayload {
            message: message.into(),
        })
    }
}
