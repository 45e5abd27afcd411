//! Bootstrap-only command: create the schema, seed, exit.

use anyhow::{Context, Result};

use userprobe_server::{initialize, Config};

/// Run the database bootstrap and exit
pub async fn run_init() -> Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::debug!(?config, "Configuration resolved");

    let pool = initialize(&config)
        .await
        .context("Database bootstrap failed")?;
    pool.close().await;

    tracing::info!("Database initialized");
    Ok(())
}
