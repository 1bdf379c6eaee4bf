//! Dashboard server implementation.

use mun_core::DashboardConfig;
use tokio::net::TcpListener;

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;

/// The dashboard server.
pub struct DashboardServer {
    config: DashboardConfig,
    state: AppState,
}

impl DashboardServer {
    /// Create a new dashboard server around prepared application state.
    pub fn new(config: DashboardConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Start the dashboard server and serve until Ctrl-C.
    pub async fn run(&self) -> Result<(), DashboardError> {
        let addr = self.config.bind_addr();
        if !self.config.auth.is_configured() && !self.config.auth.allow_anonymous {
            tracing::warn!("No dashboard users configured; privileged pages are unreachable");
        }
        if self.config.auth.allow_anonymous {
            tracing::warn!("Anonymous access enabled; privileged pages are open to anyone");
        }

        let app = routes::create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;
        tracing::info!(address = %addr, "Starting MUN attendance dashboard");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        tracing::info!("Dashboard stopped");
        Ok(())
    }

    /// Get the configured listen port.
    pub fn listen_port(&self) -> u16 {
        self.config.port
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
