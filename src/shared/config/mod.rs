//! Application configuration module
//!
//! Provides the configuration types for the server. Values are usually
//! read from the environment by `backend::server::config::load_config`.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_JWT_SECRET: &str = "dev-secret-key";
pub const DEFAULT_JWT_EXPIRES_IN: u64 = 3600;
pub const DEFAULT_NOTIFY_DELAY_MS: u64 = 1000;
pub const DEFAULT_NOTIFY_TIMEOUT_MS: u64 = 5000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// HS256 signing secret for bearer tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub jwt_expires_in: Duration,
    /// Whether `POST /api/add-message` requires a bearer token
    pub require_auth_on_add: bool,
    /// Exposes the token issuing endpoint
    pub dev_mode: bool,
    /// Simulated mail latency
    pub notify_delay: Duration,
    /// Deadline for a single notification
    pub notify_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_expires_in: Duration::from_secs(DEFAULT_JWT_EXPIRES_IN),
            require_auth_on_add: true,
            dev_mode: false,
            notify_delay: Duration::from_millis(DEFAULT_NOTIFY_DELAY_MS),
            notify_timeout: Duration::from_millis(DEFAULT_NOTIFY_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.jwt_expires_in.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "JWT_EXPIRES_IN",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// `host:port` string for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    pub fn jwt_expires_in(mut self, expires_in: Duration) -> Self {
        self.config.jwt_expires_in = expires_in;
        self
    }

    pub fn require_auth_on_add(mut self, required: bool) -> Self {
        self.config.require_auth_on_add = required;
        self
    }

    pub fn dev_mode(mut self, enabled: bool) -> Self {
        self.config.dev_mode = enabled;
        self
    }

    pub fn notify_delay(mut self, delay: Duration) -> Self {
        self.config.notify_delay = delay;
        self
    }

    pub fn notify_timeout(mut self, timeout: Duration) -> Self {
        self.config.notify_timeout = timeout;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
