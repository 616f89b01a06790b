//! In-process cache with Redis-like TTL semantics.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug)]
enum Slot {
    Empty,
    Filled { value: i64, expires_at: Instant },
    Closed,
}

/// A single-key cache kept in process memory.
///
/// Expiry follows the tokio clock, so tests can drive it with a paused
/// runtime. Once [`CacheService::close`] is called every operation reports
/// [`CacheError::Unavailable`], which is also how tests model an unreachable
/// cache.
pub struct MemoryCache {
    slot: Mutex<Slot>,
}

impl MemoryCache {
    pub fn new() -> Self {
        debug!("Using MemoryCache");
        Self {
            slot: Mutex::new(Slot::Empty),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

fn closed() -> CacheError {
    CacheError::Unavailable("connection closed".to_string())
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_cached_count(&self) -> CacheResult<Option<i64>> {
        let mut slot = self.slot.lock().await;
        match *slot {
            Slot::Closed => Err(closed()),
            Slot::Empty => Ok(None),
            Slot::Filled { value, expires_at } => {
                if Instant::now() >= expires_at {
                    *slot = Slot::Empty;
                    Ok(None)
                } else {
                    Ok(Some(value))
                }
            }
        }
    }

    async fn set_cached_count(&self, value: i64, ttl_seconds: u64) -> CacheResult<()> {
        let mut slot = self.slot.lock().await;
        if matches!(*slot, Slot::Closed) {
            return Err(closed());
        }
        *slot = Slot::Filled {
            value,
            expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
        };
        Ok(())
    }

    async fn invalidate_cached_count(&self) -> CacheResult<()> {
        let mut slot = self.slot.lock().await;
        if matches!(*slot, Slot::Closed) {
            return Err(closed());
        }
        *slot = Slot::Empty;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !matches!(*self.slot.lock().await, Slot::Closed)
    }

    async fn close(&self) {
        *self.slot.lock().await = Slot::Closed;
    }
}
