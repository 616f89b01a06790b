//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService, VISIT_COUNT_KEY};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Redis cache for the visit counter.
///
/// Holds a single multiplexed `ConnectionManager` shared by every request.
/// The manager is cloned per call; clones share the same socket.
pub struct RedisCache {
    conn: RwLock<Option<ConnectionManager>>,
    key: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            conn: RwLock::new(Some(manager)),
            key: VISIT_COUNT_KEY.to_string(),
        })
    }

    async fn connection(&self) -> CacheResult<ConnectionManager> {
        self.conn
            .read()
            .await
            .clone()
            .ok_or_else(|| CacheError::Unavailable("connection closed".to_string()))
    }
}

fn unavailable(op: &str, e: redis::RedisError) -> CacheError {
    CacheError::Unavailable(format!("Redis {} failed: {}", op, e))
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_cached_count(&self) -> CacheResult<Option<i64>> {
        let mut conn = self.connection().await?;

        let value = conn
            .get::<_, Option<i64>>(&self.key)
            .await
            .map_err(|e| unavailable("GET", e))?;

        match value {
            Some(count) => debug!(key = %self.key, count, "Cache HIT"),
            None => debug!(key = %self.key, "Cache MISS"),
        }

        Ok(value)
    }

    async fn set_cached_count(&self, value: i64, ttl_seconds: u64) -> CacheResult<()> {
        let mut conn = self.connection().await?;

        conn.set_ex::<_, _, ()>(&self.key, value, ttl_seconds)
            .await
            .map_err(|e| unavailable("SETEX", e))?;

        debug!(key = %self.key, value, ttl_seconds, "Cache SET");
        Ok(())
    }

    async fn invalidate_cached_count(&self) -> CacheResult<()> {
        let mut conn = self.connection().await?;

        let deleted = conn
            .del::<_, i32>(&self.key)
            .await
            .map_err(|e| unavailable("DEL", e))?;

        if deleted > 0 {
            debug!(key = %self.key, "Cache INVALIDATE");
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        match self.connection().await {
            Ok(mut conn) => conn.ping::<()>().await.is_ok(),
            Err(_) => false,
        }
    }

    async fn close(&self) {
        if self.conn.write().await.take().is_some() {
            info!("Redis connection closed");
        }
    }
}
