//! Pagination window for visit listings.

use super::Visit;

/// A validated listing window.
///
/// Out-of-range values never fail: they fall back to the defaults, and
/// oversized limits are clamped to [`Pagination::MAX_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 1000;

    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(Self::DEFAULT_PAGE);
        let limit = limit
            .filter(|l| *l >= 1)
            .unwrap_or(Self::DEFAULT_LIMIT)
            .min(Self::MAX_LIMIT);

        Self { page, limit }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of rows to skip, saturating for absurdly large page numbers.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`; zero when there are no rows.
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.limit - 1) / self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of visits plus the live total used to derive page counts.
#[derive(Debug, Clone)]
pub struct VisitPage {
    pub visits: Vec<Visit>,
    pub pagination: Pagination,
    pub total: i64,
}

impl VisitPage {
    pub fn total_pages(&self) -> i64 {
        self.pagination.total_pages(self.total)
    }
}
