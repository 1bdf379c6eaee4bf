//! Dashboard application state.

use mun_core::{AuthConfig, DashboardConfig};
use mun_store::{AttendanceStore, LookupDirectory};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::session::SessionSigner;

/// Shared application state for the dashboard.
///
/// Cloning is cheap; every clone refers to the same datastore handles.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Privileged datastore.
    store: Arc<dyn AttendanceStore>,
    /// Public lookup datastore.
    directory: Arc<dyn LookupDirectory>,
    /// Sign-in configuration.
    auth: AuthConfig,
    /// Session token signer.
    sessions: SessionSigner,
    /// Directory served under `/assets`.
    assets_dir: PathBuf,
}

impl AppState {
    /// Create a new application state around already constructed clients.
    pub fn new(
        config: &DashboardConfig,
        store: Arc<dyn AttendanceStore>,
        directory: Arc<dyn LookupDirectory>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                directory,
                auth: config.auth.clone(),
                sessions: SessionSigner::from_config(&config.auth),
                assets_dir: config.assets_dir.clone(),
            }),
        }
    }

    pub fn store(&self) -> &Arc<dyn AttendanceStore> {
        &self.inner.store
    }

    pub fn directory(&self) -> &Arc<dyn LookupDirectory> {
        &self.inner.directory
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.inner.auth
    }

    pub fn sessions(&self) -> &SessionSigner {
        &self.inner.sessions
    }

    pub fn assets_dir(&self) -> &Path {
        &self.inner.assets_dir
    }
}
