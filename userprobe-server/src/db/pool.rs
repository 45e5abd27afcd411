//! Database connection pool management
//!
//! Uses a sqlx MySqlPool that connects lazily: creating the pool never
//! touches the network, the first connection is opened by the bootstrap.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::DatabaseConfig;

/// Create a MySQL connection pool.
///
/// Connections are checked with a ping before being handed out, so a
/// database restart does not leave dead connections in the pool.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let pool = create_pool(&config.database);
/// ```
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .test_before_acquire(true)
        .connect_lazy_with(config.connect_options())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;

    use super::*;

    /// Pool pointing at a closed local port.
    pub(crate) fn unreachable_pool() -> MySqlPool {
        create_pool(&DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "nobody".to_string(),
            password: "nothing".to_string(),
            name: "missing".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_millis(250),
        })
    }

    /// Database settings for tests that need a live MySQL, from `TEST_DB_*`.
    pub(crate) fn live_config() -> DatabaseConfig {
        let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());
        DatabaseConfig {
            host: var("TEST_DB_HOST", "127.0.0.1"),
            port: var("TEST_DB_PORT", "3306").parse().expect("TEST_DB_PORT must be a port"),
            user: var("TEST_DB_USER", "webuser"),
            password: var("TEST_DB_PASS", "webpass"),
            name: var("TEST_DB_NAME", "webapp_test"),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[tokio::test]
    async fn lazy_pool_does_not_connect_on_creation() {
        let pool = unreachable_pool();
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    async fn unreachable_pool_fails_on_use() {
        let pool = unreachable_pool();
        let result = sqlx::query("SELECT 1").execute(&pool).await;
        assert!(result.is_err());
    }

    // Integration tests require a real database
    // Run with: TEST_DB_HOST=... cargo test -p userprobe-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(&live_config());

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let pool = create_pool(&live_config());

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i64,) = sqlx::query_as("SELECT CAST(? AS SIGNED)")
                        .bind(i as i64)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i64);
        }
    }
}
