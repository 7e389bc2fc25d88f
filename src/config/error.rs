//! Configuration errors

use thiserror::Error;

/// Failure to read or accept the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration rejected: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A configuration value outside its accepted range
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid bind address")]
    InvalidAddress(String),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be 1-300 seconds")]
    InvalidTimeout,

    #[error("max_sessions must be 1-100000")]
    InvalidSessionLimit,
}
