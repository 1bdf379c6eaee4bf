use anyhow::Context;
use clap::{Parser, Subcommand};
use mun_core::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, MunConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "mun", version, about = "MUN attendance tracker")]
struct Cli {
    /// Configuration file [default: mun.yaml, skipped when absent]
    #[arg(long, short, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the staff dashboard.
    Serve {
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate configuration and credentials without starting anything.
    Check,

    /// Print current attendance totals.
    Summary {
        /// Emit JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = MunConfig::load(cli.config.as_deref()).with_context(|| {
        let path = cli.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        format!("failed to load configuration from {}", path.display())
    })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.config {
        Some(path) => tracing::debug!(config = %path.display(), "Configuration loaded"),
        None => tracing::debug!(config = DEFAULT_CONFIG_PATH, "Configuration loaded"),
    }

    match cli.cmd {
        Command::Serve { port } => commands::serve::run(config, port).await?,
        Command::Check => commands::check::run(&config)?,
        Command::Summary { json } => commands::summary::run(&config, json).await?,
    }

    Ok(())
}
