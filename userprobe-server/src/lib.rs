//! userprobe-server: a single user record behind a small HTTP API
//!
//! Exposes the current user, the container identity and
//! liveness/readiness probes, backed by MariaDB/MySQL.

pub mod config;
pub mod db;
pub mod http;

use sqlx::MySqlPool;

pub use config::{Config, ConfigError, DatabaseConfig};
pub use db::DbError;
pub use http::{build_router, run_server, AppState};

/// Create the shared pool and bring the schema to a known-good state.
///
/// Blocks until the bootstrap succeeds or the retry budget is spent; the
/// returned error means the service must not start.
pub async fn initialize(config: &Config) -> Result<MySqlPool, DbError> {
    tracing::info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.name,
        "Connecting to database"
    );

    let pool = db::create_pool(&config.database);
    let bootstrap = db::MySqlBootstrap::new(&pool, &config.default_name);
    db::bootstrap_with_retry(&bootstrap, &config.retry).await?;

    Ok(pool)
}
