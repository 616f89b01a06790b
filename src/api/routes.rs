//! API route configuration.
//!
//! All API endpoints are rate limited per client IP by
//! [`crate::api::middleware::rate_limit`].

use crate::api::handlers::{
    heavy_handler, list_visits_handler, record_visit_handler, visit_count_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET  /visits`      - Cached visit count
/// - `POST /visit`       - Record a visit
/// - `GET  /visits/all`  - Paginated visit records, newest first
/// - `GET  /heavy`       - Synthetic CPU load
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/visits", get(visit_count_handler))
        .route("/visit", post(record_visit_handler))
        .route("/visits/all", get(list_visits_handler))
        .route("/heavy", get(heavy_handler))
}
