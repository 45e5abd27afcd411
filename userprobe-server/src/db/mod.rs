//! Database layer - connection pool, bootstrap and repositories
//!
//! # Design Principles
//!
//! - One lazily connecting pool per process, shared by every handler
//! - Bootstrap is idempotent: `CREATE TABLE IF NOT EXISTS`, seed only when empty
//! - Startup retries transient failures a bounded number of times, then fails fast

pub mod bootstrap;
pub mod error;
pub mod pool;
pub mod repos;

pub use bootstrap::{bootstrap_with_retry, Bootstrap, BootstrapReport, MySqlBootstrap, RetryPolicy};
pub use error::DbError;
pub use pool::create_pool;
pub use repos::*;
