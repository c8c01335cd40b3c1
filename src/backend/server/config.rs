/**
 * Server Configuration
 *
 * This module loads `AppConfig` from environment variables, with defaults
 * suitable for local development.
 *
 * # Variables
 *
 * | Variable              | Default          |
 * |-----------------------|------------------|
 * | `SERVER_HOST`         | `0.0.0.0`        |
 * | `SERVER_PORT`         | `3000`           |
 * | `JWT_SECRET`          | `dev-secret-key` |
 * | `JWT_EXPIRES_IN`      | `3600` (seconds) |
 * | `REQUIRE_AUTH_ON_ADD` | `true`           |
 * | `APP_ENV`             | unset            |
 * | `NOTIFY_DELAY_MS`     | `1000`           |
 * | `NOTIFY_TIMEOUT_MS`   | `5000`           |
 *
 * `APP_ENV=development` enables the token issuing endpoint.
 */

use std::str::FromStr;
use std::time::Duration;

use crate::shared::{AppConfig, ConfigError};

/// Load configuration from the process environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = AppConfig::builder();

    if let Some(host) = lookup("SERVER_HOST") {
        builder = builder.host(host);
    }
    if let Some(port) = parse_var(&lookup, "SERVER_PORT")? {
        builder = builder.port(port);
    }
    if let Some(secret) = lookup("JWT_SECRET") {
        builder = builder.jwt_secret(secret);
    }
    if let Some(secs) = parse_var::<u64, _>(&lookup, "JWT_EXPIRES_IN")? {
        builder = builder.jwt_expires_in(Duration::from_secs(secs));
    }
    if let Some(required) = parse_bool(&lookup, "REQUIRE_AUTH_ON_ADD")? {
        builder = builder.require_auth_on_add(required);
    }
    if let Some(env) = lookup("APP_ENV") {
        builder = builder.dev_mode(env.eq_ignore_ascii_case("development"));
    }
    if let Some(ms) = parse_var::<u64, _>(&lookup, "NOTIFY_DELAY_MS")? {
        builder = builder.notify_delay(Duration::from_millis(ms));
    }
    if let Some(ms) = parse_var::<u64, _>(&lookup, "NOTIFY_TIMEOUT_MS")? {
        builder = builder.notify_timeout(Duration::from_millis(ms));
    }

    let config = builder.build()?;
    if config.jwt_secret == crate::shared::config::DEFAULT_JWT_SECRET {
        tracing::warn!("JWT_SECRET not set, using the development default");
    }
    Ok(config)
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(None),
        Some("1") | Some("true") | Some("yes") => Ok(Some(true)),
        Some("0") | Some("false") | Some("no") => Ok(Some(false)),
        Some(other) => Err(ConfigError::InvalidValue {
            key,
            value: other.to_string(),
        }),
    }
}
