//! Signed session tokens.
//!
//! A token is `{user}.{expires}.{mac}`: `user` and `mac` are base64url without
//! padding, `expires` is a unix timestamp, and `mac` is HMAC-SHA256 over
//! `{user}.{expires}`. Only the login handler mints tokens.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use mun_core::AuthConfig;
use rand::Rng;
use sha2::Sha256;

use crate::error::DashboardError;

type HmacSha256 = Hmac<Sha256>;

/// Length of a generated per-process key.
const SECRET_LENGTH: usize = 32;

/// Mints and verifies session tokens.
#[derive(Clone)]
pub struct SessionSigner {
    secret: Vec<u8>,
    ttl_seconds: u64,
}

impl SessionSigner {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_seconds: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    /// Signer with a random key. Sessions do not survive a restart.
    pub fn ephemeral(ttl_seconds: u64) -> Self {
        let mut secret = [0u8; SECRET_LENGTH];
        rand::rng().fill(&mut secret);
        Self::new(secret.to_vec(), ttl_seconds)
    }

    pub fn from_config(auth: &AuthConfig) -> Self {
        match auth.resolve_session_secret() {
            Some(secret) => Self::new(secret.into_bytes(), auth.session_ttl_seconds),
            None => {
                tracing::warn!(
                    env = %auth.session_secret_env,
                    "No session secret configured; sessions end when the dashboard restarts"
                );
                Self::ephemeral(auth.session_ttl_seconds)
            }
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Mint a token for `username`, valid for the configured lifetime.
    pub fn issue(&self, username: &str) -> Result<String, DashboardError> {
        self.issue_at(username, Utc::now().timestamp())
    }

    fn issue_at(&self, username: &str, now: i64) -> Result<String, DashboardError> {
        let expires = now.saturating_add(i64::try_from(self.ttl_seconds).unwrap_or(i64::MAX));
        let payload = format!("{}.{}", URL_SAFE_NO_PAD.encode(username), expires);
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| DashboardError::Session(e.to_string()))?;
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        Ok(format!("{payload}.{signature}"))
    }

    /// Username carried by a valid, unexpired token.
    pub fn verify(&self, token: &str) -> Option<String> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn verify_at(&self, token: &str, now: i64) -> Option<String> {
        let (payload, signature) = token.rsplit_once('.')?;
        let (user, expires) = payload.split_once('.')?;

        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;
        let mut mac = HmacSha256::new_from_slice(&self.secret).ok()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let expires: i64 = expires.parse().ok()?;
        if expires <= now {
            return None;
        }

        let username = String::from_utf8(URL_SAFE_NO_PAD.decode(user).ok()?).ok()?;
        (!username.is_empty()).then_some(username)
    }
}
