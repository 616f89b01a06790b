//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Key under which the total visit count is cached.
pub const VISIT_COUNT_KEY: &str = "visit_count";

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache unavailable: {0}")]
    Unavailable(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Gateway to the key-value cache holding the visit counter.
///
/// Unlike a fail-open cache, implementations report connectivity problems as
/// [`CacheError::Unavailable`]; the caller decides how to degrade. A miss is
/// never an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache with the same TTL semantics
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached count.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(count))` on cache hit
    /// - `Ok(None)` on miss or after the TTL elapsed
    async fn get_cached_count(&self) -> CacheResult<Option<i64>>;

    /// Stores the count for `ttl_seconds`.
    async fn set_cached_count(&self, value: i64, ttl_seconds: u64) -> CacheResult<()>;

    /// Deletes the cached count. Deleting an absent key succeeds.
    async fn invalidate_cached_count(&self) -> CacheResult<()>;

    /// Checks if the cache backend answers.
    async fn health_check(&self) -> bool;

    /// Releases the underlying connection. Later calls fail with
    /// [`CacheError::Unavailable`].
    async fn close(&self);
}
