//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LOGIN_RATE_LIMIT_MAX_ATTEMPTS` - attempts allowed per key within
//!   the window (default: 5)
//! - `LOGIN_RATE_LIMIT_WINDOW_SECONDS` - trailing window length in
//!   seconds (default: 300)
//!
//! Cart quantity bounds are compile-time constants
//! ([`crate::cart::MIN_QUANTITY`], [`crate::cart::MAX_QUANTITY`]) while
//! the limiter is configurable. The asymmetry is inherited and kept on
//! purpose; harmonizing the two is an open decision, not an oversight.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Default attempts allowed per key within the window.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
/// Default trailing window length.
pub const DEFAULT_WINDOW_SECONDS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Login rate limiter tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Attempts allowed per key within the window.
    pub max_attempts: usize,
    /// Trailing window length.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            window: Duration::from_secs(DEFAULT_WINDOW_SECONDS),
        }
    }
}

/// Catalog application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Login throttling knobs.
    pub login_rate_limit: RateLimitConfig,
}

impl CatalogConfig {
    /// Load configuration from environment variables, falling back to
    /// the documented defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a variable is present
    /// but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            login_rate_limit: RateLimitConfig {
                max_attempts: parse_env("LOGIN_RATE_LIMIT_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
                window: Duration::from_secs(parse_env(
                    "LOGIN_RATE_LIMIT_WINDOW_SECONDS",
                    DEFAULT_WINDOW_SECONDS,
                )?),
            },
        })
    }
}

/// Read and parse an environment variable, or fall back to `default`
/// when it is unset.
fn parse_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidEnvVar(name.to_string(), err.to_string())),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(ConfigError::InvalidEnvVar(name.to_string(), err.to_string())),
    }
}
