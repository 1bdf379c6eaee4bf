//! Error types for the datastore clients.

use mun_core::ModelError;
use thiserror::Error;

/// Errors returned by the admin handle and the public client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The service-account credential is missing or malformed.
    #[error("invalid admin credential: {0}")]
    Credential(String),

    /// The public client was built without a URL or key.
    #[error("public datastore is not configured: missing {0}")]
    NotConfigured(&'static str),

    /// Postgres error from the admin pool.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Non-success response from the public REST endpoint.
    #[error("public datastore returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network or decoding failure talking to the public REST endpoint.
    #[error("public datastore request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A stored record failed domain validation.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] ModelError),

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}
