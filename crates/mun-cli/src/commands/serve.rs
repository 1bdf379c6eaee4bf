//! `mun serve` - start the staff dashboard.
//!
//! Both datastore handles are created here, once, and shared with every
//! request through the dashboard state.

use anyhow::Context;
use mun_core::MunConfig;
use mun_dashboard::{AppState, DashboardServer};
use mun_store::{AdminDb, PublicClient};
use std::sync::Arc;

pub async fn run(mut config: MunConfig, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.dashboard.port = port;
    }

    let admin = AdminDb::connect(&config.admin)
        .await
        .context("refusing to start without a working admin datastore")?;

    let public = PublicClient::from_config(&config.public);
    if public.is_configured() {
        tracing::info!(url = %public.url(), "Public datastore configured");
    }

    let state = AppState::new(&config.dashboard, Arc::new(admin), Arc::new(public));
    let server = DashboardServer::new(config.dashboard.clone(), state);
    tracing::info!(port = server.listen_port(), "Dashboard listening");

    server.run().await?;
    Ok(())
}
