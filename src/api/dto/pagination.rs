//! Pagination query parameters and listing response.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::entities::{Pagination, Visit, VisitPage};

/// Query parameters for `GET /api/visits/all`.
///
/// Values that are missing or not integers deserialize to `None` instead of
/// rejecting the request; [`Pagination`] then applies the defaults.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListVisitsQuery {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl From<ListVisitsQuery> for Pagination {
    fn from(q: ListVisitsQuery) -> Self {
        Pagination::new(q.page, q.limit)
    }
}

/// Paginated list of visits.
#[derive(Debug, Serialize)]
pub struct VisitListResponse {
    pub visits: Vec<Visit>,
    pub pagination: PaginationMeta,
    pub container: String,
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl VisitListResponse {
    pub fn new(page: VisitPage, container: impl Into<String>) -> Self {
        let pagination = PaginationMeta {
            page: page.pagination.page(),
            limit: page.pagination.limit(),
            total: page.total,
            total_pages: page.total_pages(),
        };

        Self {
            visits: page.visits,
            pagination,
            container: container.into(),
        }
    }
}
