//! Bounded PostgreSQL connection pool.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Pool sizing and timeout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// Wait budget for checking a connection out; exceeding it fails the call.
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl From<&Config> for PoolSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_connections: config.db_max_connections,
            acquire_timeout: Duration::from_secs(config.db_connect_timeout),
            idle_timeout: Duration::from_secs(config.db_idle_timeout),
            max_lifetime: Duration::from_secs(config.db_max_lifetime),
        }
    }
}

/// Opens the pool and establishes the first connection.
///
/// # Errors
///
/// Returns the driver error when the server cannot be reached within
/// `acquire_timeout`.
pub async fn connect_pool(database_url: &str, settings: PoolSettings) -> sqlx::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect(database_url)
        .await
}

/// Trivial liveness query.
pub async fn ping_pool(pool: &PgPool) -> sqlx::Result<()> {
    sqlx::query("SELECT NOW()").execute(pool).await?;
    Ok(())
}
