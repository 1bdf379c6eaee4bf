//! Configuration types for the MUN attendance tracker.
//!
//! Configuration is loaded from a single YAML file (`mun.yaml` by default).
//! Every field has a default, so a missing file yields a usable configuration
//! that reads credentials from the environment.
//!
//! # Sections
//!
//! - **admin**: service-account credential source and pool settings for the privileged datastore
//! - **public**: URL/key sources for the anonymous datastore
//! - **dashboard**: listen address, static assets and sign-in accounts

pub mod admin;
pub mod dashboard;
pub mod public;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use admin::{AdminConfig, PoolConfig};
pub use dashboard::{AuthConfig, BasicAuthUser, DashboardConfig};
pub use public::PublicConfig;

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "mun.yaml";

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "MUN_CONFIG";

/// Complete configuration loaded from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MunConfig {
    /// Privileged datastore.
    #[serde(default)]
    pub admin: AdminConfig,

    /// Anonymous datastore.
    #[serde(default)]
    pub public: PublicConfig,

    /// Dashboard settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MunConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Load the configuration for a run. A path the operator named must
    /// exist; only the implicit [`DEFAULT_CONFIG_PATH`] may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::load_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    /// Log filter directive, defaulting to `info`.
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_is_default() {
        let config = MunConfig::from_yaml("").unwrap();
        assert_eq!(config.dashboard.port, 8080);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
log_level: debug
admin:
  credential_env: MUN_ADMIN_KEY
  pool:
    max_connections: 12
public:
  url: https://project.supabase.co
  timeout_seconds: 3
dashboard:
  port: 9000
  auth:
    users:
      - username: secretariat
        password_env: SECRETARIAT_PASSWORD
"#;
        let config = MunConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.admin.credential_env, "MUN_ADMIN_KEY");
        assert_eq!(config.admin.pool.max_connections, 12);
        assert_eq!(config.admin.pool.acquire_timeout_seconds, 10);
        assert_eq!(config.public.timeout_seconds, 3);
        assert_eq!(config.dashboard.port, 9000);
        assert_eq!(config.dashboard.auth.users[0].username, "secretariat");
    }

    #[test]
    fn test_sample_config_parses() {
        let config = MunConfig::from_yaml(include_str!("../../../../mun.yaml")).unwrap();
        assert_eq!(config.public.key_envs.len(), 2);
        assert!(!config.dashboard.auth.allow_anonymous);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = MunConfig::from_yaml("dashboard: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("mun.yaml");
        assert_eq!(MunConfig::load_or_default(&missing).unwrap().dashboard.port, 8080);

        let mut file = fs::File::create(&missing).unwrap();
        writeln!(file, "dashboard:\n  port: 4000").unwrap();
        assert_eq!(MunConfig::load_or_default(&missing).unwrap().dashboard.port, 4000);
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("typo.yaml");
        let err = MunConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));

        fs::write(&missing, "dashboard:\n  port: 4100\n").unwrap();
        assert_eq!(MunConfig::load(Some(&missing)).unwrap().dashboard.port, 4100);
    }
}
