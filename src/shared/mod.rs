//! Shared Module
//!
//! This module contains types that do not depend on the HTTP framework:
//! the message entity, the real-time channel frames, the core error type
//! and the application configuration.

/// Message data structure
pub mod message;

/// Real-time channel frames
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use message::Message;
pub use event::{Announcement, ClientEvent, ErrorPayload, ServerEvent};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
