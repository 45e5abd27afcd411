//! HTTP server command
//!
//! Bootstraps the database, then serves until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use userprobe_server::{initialize, run_server, AppState, Config};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0:8000)
    #[arg(long, short = 'b', env = "BIND_ADDR")]
    pub bind: Option<SocketAddr>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = Config::from_env().context("Invalid configuration")?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    tracing::debug!(?config, "Configuration resolved");

    // No traffic is served until the schema is in place
    let pool = initialize(&config)
        .await
        .context("Database bootstrap failed")?;

    let state = AppState {
        pool,
        container_id: config.container_id.clone(),
    };

    tracing::info!("Starting userprobe server on {}", config.bind_addr);

    run_server(state, config.bind_addr)
        .await
        .context("Server error")?;

    Ok(())
}
