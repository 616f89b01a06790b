//! Visit recording, read-through counting and listing.

use std::sync::Arc;

use crate::domain::entities::{NewVisit, Pagination, Visit, VisitCount, VisitPage};
use crate::domain::repositories::VisitRepository;
use crate::error::StoreError;
use crate::infrastructure::cache::CacheService;
use tracing::{debug, warn};

/// TTL applied to the cached count unless configured otherwise.
pub const DEFAULT_COUNT_TTL_SECONDS: u64 = 10;

/// Service coordinating the visit store and the counter cache.
///
/// The cache only ever holds a value read from the store (read-through), and
/// every successful insert deletes it rather than updating it
/// (write-invalidation).
///
/// A reader that misses between a writer's insert and its delete may put a
/// pre-insert count back into the cache. That value lives at most one TTL.
pub struct VisitService<R: VisitRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    count_ttl_seconds: u64,
}

impl<R: VisitRepository> VisitService<R> {
    /// Creates a new visit service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, count_ttl_seconds: u64) -> Self {
        Self {
            repository,
            cache,
            count_ttl_seconds,
        }
    }

    /// Returns the total number of visits.
    ///
    /// Served from the cache when present. On a miss, or when the cache is
    /// unreachable, the count is read from the store and written back to the
    /// cache on a best-effort basis.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only when the store read fails. Cache failures
    /// never reach the caller.
    pub async fn get_visit_count(&self) -> Result<VisitCount, StoreError> {
        match self.cache.get_cached_count().await {
            Ok(Some(count)) => return Ok(VisitCount::from_cache(count)),
            Ok(None) => debug!("visit count not cached"),
            Err(e) => warn!(error = %e, "cache read failed, falling back to store"),
        }

        let count = self.repository.count().await?;

        if let Err(e) = self
            .cache
            .set_cached_count(count, self.count_ttl_seconds)
            .await
        {
            warn!(error = %e, "failed to cache visit count");
        }

        Ok(VisitCount::from_database(count))
    }

    /// Records a visit and invalidates the cached count.
    ///
    /// A missing user agent is stored as `"unknown"`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the insert fails; the cache is left untouched
    /// in that case. A failed invalidation is logged and ignored.
    pub async fn record_visit(
        &self,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> Result<Visit, StoreError> {
        let visit = self
            .repository
            .insert(NewVisit::new(user_agent, ip_address))
            .await?;

        if let Err(e) = self.cache.invalidate_cached_count().await {
            warn!(error = %e, visit_id = visit.id, "failed to invalidate cached visit count");
        }

        Ok(visit)
    }

    /// Lists one page of visits, newest first, with a live total.
    ///
    /// The page and the total come from two separate queries; a visit inserted
    /// in between is reflected in the total only.
    pub async fn list_visits(&self, pagination: Pagination) -> Result<VisitPage, StoreError> {
        let visits = self
            .repository
            .list(pagination.limit(), pagination.offset())
            .await?;
        let total = self.repository.count().await?;

        Ok(VisitPage {
            visits,
            pagination,
            total,
        })
    }

    /// Whether the store answers a liveness query.
    pub async fn store_ready(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }

    /// Whether the cache answers a PING.
    pub async fn cache_ready(&self) -> bool {
        self.cache.health_check().await
    }
}
