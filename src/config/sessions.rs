//! Session store settings

use serde::Deserialize;

use super::error::ValidationError;

const MAX_SESSION_LIMIT: usize = 100_000;

/// Bounds on live booking sessions
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionsConfig {
    /// Concurrent sessions the store accepts before refusing new ones
    pub max_sessions: usize,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self { max_sessions: 1000 }
    }
}

impl SessionsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if (1..=MAX_SESSION_LIMIT).contains(&self.max_sessions) {
            Ok(())
        } else {
            Err(ValidationError::InvalidSessionLimit)
        }
    }
}
