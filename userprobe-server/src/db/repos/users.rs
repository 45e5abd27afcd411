//! User repository
//!
//! The service only ever reads the row with the smallest `id`; extra rows
//! are tolerated and ignored.

use sqlx::MySqlPool;

use crate::db::DbError;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Name of the user with the smallest id, `None` if the table is empty.
    pub async fn first_name(&self) -> Result<Option<String>, DbError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT name FROM users ORDER BY id LIMIT 1")
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(|(name,)| name))
    }

    /// Trivial roundtrip used by the readiness probe.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use crate::db::pool::testing::{live_config, unreachable_pool};

    #[tokio::test]
    async fn ping_fails_without_database() {
        let pool = unreachable_pool();
        assert!(UserRepo::new(&pool).ping().await.is_err());
    }

    // Both live tests recreate the table; run them with --test-threads=1.

    #[tokio::test]
    #[ignore = "requires database"]
    async fn first_name_is_none_for_empty_table() {
        let pool = create_pool(&live_config());
        sqlx::query("DROP TABLE IF EXISTS users").execute(&pool).await.unwrap();
        sqlx::query("CREATE TABLE users (id INT AUTO_INCREMENT PRIMARY KEY, name VARCHAR(255) NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();

        assert_eq!(UserRepo::new(&pool).first_name().await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn first_name_returns_smallest_id() {
        let pool = create_pool(&live_config());
        sqlx::query("DROP TABLE IF EXISTS users").execute(&pool).await.unwrap();
        sqlx::query("CREATE TABLE users (id INT AUTO_INCREMENT PRIMARY KEY, name VARCHAR(255) NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        // Insert out of id order
        sqlx::query("INSERT INTO users (id, name) VALUES (7, 'late'), (2, 'first'), (5, 'middle')")
            .execute(&pool)
            .await
            .unwrap();

        let repo = UserRepo::new(&pool);
        assert_eq!(repo.first_name().await.unwrap().as_deref(), Some("first"));
        repo.ping().await.unwrap();
    }
}
