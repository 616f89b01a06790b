//! PostgreSQL implementation of the visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::StoreError;
use crate::infrastructure::persistence::ping_pool;

#[derive(FromRow)]
struct VisitRow {
    id: i64,
    user_agent: String,
    ip_address: Option<String>,
    visit_time: DateTime<Utc>,
}

impl From<VisitRow> for Visit {
    fn from(r: VisitRow) -> Self {
        Visit::new(r.id, r.user_agent, r.ip_address, r.visit_time)
    }
}

/// PostgreSQL repository for visit records.
///
/// Every call checks a connection out of the shared pool; exhaustion surfaces
/// as [`StoreError::Unavailable`] once the pool's acquire timeout elapses.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn insert(&self, new_visit: NewVisit) -> Result<Visit, StoreError> {
        let row = sqlx::query_as::<_, VisitRow>(
            r#"
            INSERT INTO visits (user_agent, ip_address)
            VALUES ($1, $2)
            RETURNING id, user_agent, ip_address, visit_time
            "#,
        )
        .bind(new_visit.user_agent)
        .bind(new_visit.ip_address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visits")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Visit>, StoreError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, user_agent, ip_address, visit_time
            FROM visits
            ORDER BY visit_time DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        ping_pool(self.pool.as_ref()).await?;
        Ok(())
    }
}
