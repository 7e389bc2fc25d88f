//! HTTP server settings

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the HTTP server runs. Missing keys fall back to
/// [`ServerConfig::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    /// Upper bound on a single request, 1-300 seconds
    pub request_timeout_secs: u64,
    /// Comma-separated allow-list; any origin when absent
    pub cors_origins: Option<String>,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,travel_desk=debug,tower_http=info".to_string(),
            log_format: LogFormat::Pretty,
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Resolves `host:port` into a bindable address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ValidationError::InvalidAddress(addr))
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    /// Allowed CORS origins, trimmed, blanks dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}
