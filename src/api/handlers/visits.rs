//! Handlers for the visit counter and visit records.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;

use crate::api::dto::pagination::{ListVisitsQuery, VisitListResponse};
use crate::api::dto::visits::{RecordVisitRequest, RecordVisitResponse, VisitCountResponse};
use crate::api::extract::ClientAddr;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the total number of visits.
///
/// # Endpoint
///
/// `GET /api/visits`
///
/// # Response
///
/// ```json
/// { "visits": 3, "source": "cache", "container": "web-1" }
/// ```
///
/// `source` is `"database"` when the count was recomputed, which happens on
/// the first read after a visit was recorded or after the cached value expired.
pub async fn visit_count_handler(
    State(state): State<AppState>,
) -> Result<Json<VisitCountResponse>, AppError> {
    let count = state.visit_service.get_visit_count().await?;

    Ok(Json(VisitCountResponse {
        visits: count.count,
        source: count.source,
        container: state.instance_id.to_string(),
    }))
}

/// Records a visit.
///
/// # Endpoint
///
/// `POST /api/visit`
///
/// # Request Body
///
/// ```json
/// { "user_agent": "Mozilla/5.0", "ip": "203.0.113.7" }
/// ```
///
/// Both fields are optional, as is the body. `user_agent` defaults to
/// `"unknown"`, `ip` to the peer address of the connection. Bodies that are
/// not declared as JSON are ignored.
///
/// # Errors
///
/// Returns 400 Bad Request if a JSON body does not parse.
pub async fn record_visit_handler(
    State(state): State<AppState>,
    ClientAddr(peer): ClientAddr,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<RecordVisitResponse>), AppError> {
    let payload = RecordVisitRequest::from_body(&headers, &body).map_err(|e| {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() }))
    })?;

    let visit = state
        .visit_service
        .record_visit(payload.user_agent, payload.ip.or(peer))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordVisitResponse {
            success: true,
            visit,
            container: state.instance_id.to_string(),
        }),
    ))
}

/// Lists visits, newest first.
///
/// # Endpoint
///
/// `GET /api/visits/all`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `limit` (optional): Items per page (default: 10, max: 1000)
///
/// Missing, non-numeric or non-positive values fall back to the defaults.
/// The total is recounted on every request.
pub async fn list_visits_handler(
    State(state): State<AppState>,
    Query(params): Query<ListVisitsQuery>,
) -> Result<Json<VisitListResponse>, AppError> {
    let page = state.visit_service.list_visits(params.into()).await?;

    Ok(Json(VisitListResponse::new(
        page,
        state.instance_id.to_string(),
    )))
}
