//! Service configuration - resolved once from the environment
//!
//! All variables are optional:
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS`, `DB_NAME`: MariaDB/MySQL endpoint
//! - `DEFAULT_NAME`: name seeded into an empty `users` table
//! - `HOSTNAME`: container identity reported by `GET /container`
//! - `DB_MAX_CONNECTIONS`, `DB_ACQUIRE_TIMEOUT_SECS`: pool tuning
//! - `DB_RETRY_ATTEMPTS`, `DB_RETRY_INTERVAL_SECS`: startup bootstrap retry budget
//! - `BIND_ADDR`: HTTP listen address
//!
//! Empty values count as unset.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

use crate::db::RetryPolicy;

pub const DEFAULT_DB_HOST: &str = "mariadb";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "webuser";
pub const DEFAULT_DB_PASS: &str = "webpass";
pub const DEFAULT_DB_NAME: &str = "webapp";
pub const DEFAULT_USER_NAME: &str = "JM";
pub const UNKNOWN_CONTAINER: &str = "unknown";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Database connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Connect options built field by field, so credentials need no URL escaping.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// Name inserted when the `users` table is found empty
    pub default_name: String,
    /// Reported by `GET /container`
    pub container_id: String,
    pub retry: RetryPolicy,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            host: text(&lookup, "DB_HOST", DEFAULT_DB_HOST),
            port: parsed(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            user: text(&lookup, "DB_USER", DEFAULT_DB_USER),
            password: text(&lookup, "DB_PASS", DEFAULT_DB_PASS),
            name: text(&lookup, "DB_NAME", DEFAULT_DB_NAME),
            max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout: Duration::from_secs(parsed(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?),
        };

        let defaults = RetryPolicy::default();
        let retry = RetryPolicy {
            max_attempts: parsed(&lookup, "DB_RETRY_ATTEMPTS", defaults.max_attempts)?,
            interval: Duration::from_secs(parsed(
                &lookup,
                "DB_RETRY_INTERVAL_SECS",
                defaults.interval.as_secs(),
            )?),
        };

        let raw_bind = text(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr: SocketAddr = raw_bind.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: raw_bind.clone(),
        })?;

        Ok(Self {
            database,
            default_name: text(&lookup, "DEFAULT_NAME", DEFAULT_USER_NAME),
            container_id: text(&lookup, "HOSTNAME", UNKNOWN_CONTAINER),
            retry,
            bind_addr,
        })
    }
}

fn value<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}

fn text<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    value(lookup, key).unwrap_or_else(|| default.to_string())
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match value(lookup, key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
