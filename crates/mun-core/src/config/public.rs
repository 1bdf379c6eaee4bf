//! Public (anonymous) datastore configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the anonymous PostgREST client.
///
/// Environment variables take precedence over inline values, matching how the
/// browser build of the app reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicConfig {
    /// Environment variable holding the project URL.
    #[serde(default = "default_url_env")]
    pub url_env: String,

    /// Environment variables holding the public key, tried in order.
    #[serde(default = "default_key_envs")]
    pub key_envs: Vec<String>,

    /// Project URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Public (anon) key. Not a secret; row level security applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for PublicConfig {
    fn default() -> Self {
        Self {
            url_env: default_url_env(),
            key_envs: default_key_envs(),
            url: None,
            anon_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

impl PublicConfig {
    pub fn resolve_url(&self) -> Option<String> {
        non_empty_env(&self.url_env).or_else(|| self.url.clone().filter(|u| !u.is_empty()))
    }

    pub fn resolve_key(&self) -> Option<String> {
        self.key_envs
            .iter()
            .find_map(|name| non_empty_env(name))
            .or_else(|| self.anon_key.clone().filter(|k| !k.is_empty()))
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn default_url_env() -> String {
    "NEXT_PUBLIC_SUPABASE_URL".to_string()
}

fn default_key_envs() -> Vec<String> {
    vec![
        "NEXT_PUBLIC_SUPABASE_ANON_KEY".to_string(),
        "NEXT_PUBLIC_SUPABASE_PUBLISHABLE_DEFAULT_KEY".to_string(),
    ]
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_env_names() {
        let config = PublicConfig::default();
        assert_eq!(config.url_env, "NEXT_PUBLIC_SUPABASE_URL");
        assert_eq!(
            config.key_envs,
            vec![
                "NEXT_PUBLIC_SUPABASE_ANON_KEY",
                "NEXT_PUBLIC_SUPABASE_PUBLISHABLE_DEFAULT_KEY"
            ]
        );
    }

    #[test]
    fn test_inline_values_used_when_env_unset() {
        let config = PublicConfig {
            url_env: "MUN_TEST_UNSET_URL".to_string(),
            key_envs: vec!["MUN_TEST_UNSET_KEY".to_string()],
            url: Some("https://example.supabase.co".to_string()),
            anon_key: Some("anon".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_url().as_deref(),
            Some("https://example.supabase.co")
        );
        assert_eq!(config.resolve_key().as_deref(), Some("anon"));
    }

    #[test]
    fn test_empty_inline_values_resolve_to_none() {
        let config = PublicConfig {
            url_env: "MUN_TEST_UNSET_URL".to_string(),
            key_envs: vec![],
            url: Some(String::new()),
            anon_key: None,
            ..Default::default()
        };
        assert!(config.resolve_url().is_none());
        assert!(config.resolve_key().is_none());
    }
}
