//! Admin (privileged) datastore configuration.
//!
//! The admin handle is built from a service-account credential blob. Two
//! sources are supported, in order of precedence:
//! 1. `credential_env` - an environment variable holding the JSON blob
//! 2. `credential_file` - a path to a JSON file

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;

/// Configuration for the privileged database handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Environment variable containing the service-account JSON.
    #[serde(default = "default_credential_env")]
    pub credential_env: String,

    /// File containing the service-account JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_file: Option<PathBuf>,

    /// Connection pool configuration.
    #[serde(default)]
    pub pool: PoolConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            credential_env: default_credential_env(),
            credential_file: None,
            pool: PoolConfig::default(),
        }
    }
}

/// Connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Timeout in seconds when acquiring a connection.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            acquire_timeout_seconds: default_acquire_timeout(),
        }
    }
}

impl AdminConfig {
    /// Read the raw credential blob.
    ///
    /// The environment variable wins when it is set and non-empty.
    pub fn resolve_credential(&self) -> Result<String, ConfigError> {
        if let Ok(blob) = std::env::var(&self.credential_env)
            && !blob.trim().is_empty()
        {
            return Ok(blob);
        }

        if let Some(path) = &self.credential_file {
            return Ok(std::fs::read_to_string(path)?);
        }

        Err(ConfigError::Config(format!(
            "no admin credential: set {} or admin.credential_file",
            self.credential_env
        )))
    }
}

fn default_credential_env() -> String {
    "FIREBASE_SERVICE_ACCOUNT_KEY".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    10
}
