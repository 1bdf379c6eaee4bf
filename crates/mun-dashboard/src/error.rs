//! Error types for the dashboard crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mun_store::StoreError;
use thiserror::Error;

use crate::loader::LoadError;

/// Errors that can occur in the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Failed to start the server.
    #[error("failed to start dashboard: {0}")]
    StartupFailed(String),

    /// No valid session.
    #[error("authentication required")]
    AuthenticationFailed,

    /// Invalid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Datastore error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Session token could not be minted.
    #[error("session error: {0}")]
    Session(String),

    /// Staff loader misuse.
    #[error(transparent)]
    Loader(#[from] LoadError),
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            DashboardError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DashboardError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            DashboardError::Store(
                StoreError::NotConfigured(_) | StoreError::Http { .. } | StoreError::Transport(_),
            ) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}
