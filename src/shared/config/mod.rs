//! Application configuration module
//!
//! Provides the service configuration, loaded from the environment or
//! assembled through [`AppConfigBuilder`].
//!
//! # Environment Variables
//!
//! | Variable               | Default                       |
//! |------------------------|-------------------------------|
//! | `DATABASE_URL`         | `sqlite://tokengate.db?mode=rwc` |
//! | `SERVER_PORT`          | `3000`                        |
//! | `PASSWORD_COST`        | `12`                          |
//! | `TOKEN_MAX_ATTEMPTS`   | `8`                           |
//! | `REQUEST_TIMEOUT_SECS` | `10`                          |

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://tokengate.db?mode=rwc";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
/// bcrypt cost factor used when hashing passwords
pub const DEFAULT_PASSWORD_COST: u32 = 12;
/// Upper bound on token generation attempts per sign-in
pub const DEFAULT_MAX_TOKEN_ATTEMPTS: u32 = 8;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// bcrypt accepts costs in this range
const PASSWORD_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection URL for the credential and token store
    pub database_url: String,
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// bcrypt cost factor for newly hashed passwords
    pub password_cost: u32,
    /// Maximum token generation attempts before giving up
    pub token_max_attempts: u32,
    /// Deadline for all storage work of one sign-in, from validation on
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            password_cost: DEFAULT_PASSWORD_COST,
            token_max_attempts: DEFAULT_MAX_TOKEN_ATTEMPTS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults. Set but unparsable
    /// values are an error rather than silently ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = parse_var(&lookup, "SERVER_PORT")? {
            builder = builder.server_port(port);
        }
        if let Some(cost) = parse_var(&lookup, "PASSWORD_COST")? {
            builder = builder.password_cost(cost);
        }
        if let Some(attempts) = parse_var(&lookup, "TOKEN_MAX_ATTEMPTS")? {
            builder = builder.token_max_attempts(attempts);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "REQUEST_TIMEOUT_SECS")? {
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if !PASSWORD_COST_RANGE.contains(&self.password_cost) {
            return Err(ConfigError::OutOfRange {
                key: "PASSWORD_COST",
                value: self.password_cost.to_string(),
            });
        }
        if self.token_max_attempts == 0 {
            return Err(ConfigError::OutOfRange {
                key: "TOKEN_MAX_ATTEMPTS",
                value: "0".to_string(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::OutOfRange {
                key: "REQUEST_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
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

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    server_port: Option<u16>,
    password_cost: Option<u32>,
    token_max_attempts: Option<u32>,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the bcrypt cost factor
    pub fn password_cost(mut self, cost: u32) -> Self {
        self.password_cost = Some(cost);
        self
    }

    pub fn token_max_attempts(mut self, attempts: u32) -> Self {
        self.token_max_attempts = Some(attempts);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            server_port: self.server_port.unwrap_or(defaults.server_port),
            password_cost: self.password_cost.unwrap_or(defaults.password_cost),
            token_max_attempts: self
                .token_max_attempts
                .unwrap_or(defaults.token_max_attempts),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("value out of range for {key}: {value}")]
    OutOfRange { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
