//! Dashboard configuration.
//!
//! This module defines configuration for the staff dashboard web UI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the staff dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Host to bind the dashboard to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/assets` (event and hero images).
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Authentication configuration for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Staff accounts allowed to sign in.
    #[serde(default)]
    pub users: Vec<BasicAuthUser>,

    /// Let unauthenticated requests reach privileged pages. Local development only.
    #[serde(default)]
    pub allow_anonymous: bool,

    /// Environment variable holding the key that signs session cookies.
    #[serde(default = "default_session_secret_env")]
    pub session_secret_env: String,

    /// Inline signing key, used when the environment variable is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_secret: Option<String>,

    /// Session lifetime in seconds.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            allow_anonymous: false,
            session_secret_env: default_session_secret_env(),
            session_secret: None,
            session_ttl_seconds: default_session_ttl(),
        }
    }
}

impl AuthConfig {
    /// Session signing key: the environment variable wins over the inline value.
    /// `None` means the dashboard has to generate a per-process key.
    pub fn resolve_session_secret(&self) -> Option<String> {
        std::env::var(&self.session_secret_env)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.session_secret.clone().filter(|v| !v.trim().is_empty()))
    }

    /// Whether at least one user can actually sign in.
    pub fn is_configured(&self) -> bool {
        self.users.iter().any(|u| u.get_password().is_some())
    }

    /// Check a username/password pair, returning the canonical username.
    pub fn validate_basic_auth(&self, username: &str, password: &str) -> Option<String> {
        self.users
            .iter()
            .find(|u| u.username == username)
            .filter(|u| u.get_password().as_deref() == Some(password))
            .map(|u| u.username.clone())
    }

    /// Whether a username belongs to a configured user.
    pub fn has_user(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }
}

/// Basic auth user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAuthUser {
    /// Username.
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: Option<String>,
    /// Environment variable containing the password.
    #[serde(default)]
    pub password_env: Option<String>,
}

impl BasicAuthUser {
    /// Get the password, checking password_env first.
    pub fn get_password(&self) -> Option<String> {
        if let Some(env_var) = &self.password_env
            && let Ok(password) = std::env::var(env_var)
        {
            return Some(password);
        }
        self.password.clone()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_dir: default_assets_dir(),
            auth: AuthConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_session_secret_env() -> String {
    "MUN_SESSION_SECRET".to_string()
}

fn default_session_ttl() -> u64 {
    86_400
}
