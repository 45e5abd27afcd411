//! Schema bootstrap with bounded startup retry
//!
//! The database container may still be starting when this process comes up,
//! so the bootstrap is retried on transient failures. Once the budget is
//! spent one last attempt runs unguarded: its error is returned to the
//! caller and aborts startup.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::DbError;

/// Outcome of a successful bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// True when the table was empty and the default row was inserted
    pub seeded: bool,
}

/// An idempotent schema + seed routine.
#[async_trait]
pub trait Bootstrap: Send + Sync {
    async fn bootstrap(&self) -> Result<BootstrapReport, DbError>;
}

/// Retry budget for the startup bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Guarded attempts before the final unguarded one
    pub max_attempts: u32,
    /// Sleep between attempts
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(1),
        }
    }
}

/// Run `target` until it succeeds, retrying transient failures.
///
/// Non-transient errors are returned immediately. After `max_attempts`
/// transient failures the routine is invoked once more and whatever it
/// returns is the result.
pub async fn bootstrap_with_retry<B>(target: &B, policy: &RetryPolicy) -> Result<BootstrapReport, DbError>
where
    B: Bootstrap + ?Sized,
{
    for attempt in 1..=policy.max_attempts {
        match target.bootstrap().await {
            Ok(report) => {
                tracing::info!(attempt, seeded = report.seeded, "Database bootstrap complete");
                return Ok(report);
            }
            Err(e) if e.is_transient() => {
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %e,
                    "Database not ready, retrying"
                );
                tokio::time::sleep(policy.interval).await;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::warn!(max_attempts = policy.max_attempts, "Retry budget exhausted, final bootstrap attempt");
    let report = target.bootstrap().await?;
    tracing::info!(seeded = report.seeded, "Database bootstrap complete");
    Ok(report)
}

/// Creates the `users` table and seeds the default row against MySQL.
pub struct MySqlBootstrap<'a> {
    pool: &'a MySqlPool,
    default_name: &'a str,
}

impl<'a> MySqlBootstrap<'a> {
    pub fn new(pool: &'a MySqlPool, default_name: &'a str) -> Self {
        Self { pool, default_name }
    }
}

#[async_trait]
impl Bootstrap for MySqlBootstrap<'_> {
    /// Runs in one transaction: create table, count rows, seed if empty.
    async fn bootstrap(&self) -> Result<BootstrapReport, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;

        let seeded = count == 0;
        if seeded {
            sqlx::query("INSERT INTO users (name) VALUES (?)")
                .bind(self.default_name)
                .execute(&mut *tx)
                .await?;
            tracing::info!(name = %self.default_name, "Seeded default user");
        }

        tx.commit().await?;

        Ok(BootstrapReport { seeded })
    }
}
