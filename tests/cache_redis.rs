//! Runs against a live Redis: `REDIS_URL` (default `redis://localhost:6379/0`).
//!
//! ```bash
//! cargo test --test cache_redis -- --ignored
//! ```

use serial_test::serial;
use std::time::Duration;
use visit_counter::infrastructure::cache::{CacheError, CacheService, RedisCache};

async fn connect() -> RedisCache {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379/0".to_string());
    let cache = RedisCache::connect(&url).await.unwrap();
    cache.invalidate_cached_count().await.unwrap();
    cache
}

#[tokio::test]
#[ignore = "requires a running Redis"]
#[serial]
async fn test_set_then_get() {
    let cache = connect().await;

    assert_eq!(cache.get_cached_count().await.unwrap(), None);

    cache.set_cached_count(42, 10).await.unwrap();

    assert_eq!(cache.get_cached_count().await.unwrap(), Some(42));
    assert!(cache.health_check().await);
}

#[tokio::test]
#[ignore = "requires a running Redis"]
#[serial]
async fn test_invalidate_is_idempotent() {
    let cache = connect().await;
    cache.set_cached_count(7, 10).await.unwrap();

    cache.invalidate_cached_count().await.unwrap();
    cache.invalidate_cached_count().await.unwrap();

    assert_eq!(cache.get_cached_count().await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires a running Redis"]
#[serial]
async fn test_value_expires_after_ttl() {
    let cache = connect().await;
    cache.set_cached_count(3, 1).await.unwrap();

    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert_eq!(cache.get_cached_count().await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires a running Redis"]
#[serial]
async fn test_closed_cache_is_unavailable() {
    let cache = connect().await;

    cache.close().await;

    assert!(matches!(
        cache.get_cached_count().await,
        Err(CacheError::Unavailable(_))
    ));
    assert!(!cache.health_check().await);
}
