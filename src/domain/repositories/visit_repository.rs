//! Repository trait for visit storage.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::StoreError;
use async_trait::async_trait;

/// Store gateway for visit records.
///
/// All operations hit the database; implementations must not cache.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Inserts a visit and returns it with its store-assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when no connection can be acquired
    /// in time, [`StoreError::Query`] when the statement fails.
    async fn insert(&self, new_visit: NewVisit) -> Result<Visit, StoreError>;

    /// Counts all visit records.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Lists visits newest first (`visit_time DESC, id DESC`).
    ///
    /// # Arguments
    ///
    /// - `limit` - Maximum number of rows returned
    /// - `offset` - Number of rows skipped
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Visit>, StoreError>;

    /// Runs a trivial query to confirm the store answers.
    async fn ping(&self) -> Result<(), StoreError>;
}
