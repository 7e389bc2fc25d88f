//! Runtime configuration
//!
//! Settings come from the process environment (and a `.env` file when one
//! exists). Variables are prefixed `TRAVEL_DESK` and nest with `__`, so
//! `TRAVEL_DESK__SERVER__PORT=9000` sets `server.port`. Every value has a
//! default; an empty environment gives a runnable server.
//!
//! ```no_run
//! use travel_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration should load");
//! config.validate().expect("configuration should be in range");
//! ```

mod error;
mod server;
mod sessions;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};
pub use sessions::SessionsConfig;

use serde::Deserialize;

const ENV_PREFIX: &str = "TRAVEL_DESK";
const ENV_SEPARATOR: &str = "__";

/// All settings for one server process
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sessions: SessionsConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the `TRAVEL_DESK__*` variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` when a variable cannot be parsed
    /// into its field's type (for example a non-numeric port).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR);
        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section's ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.sessions.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
