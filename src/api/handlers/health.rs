//! Handlers for liveness and readiness checks.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthResponse, ReadinessChecks, ReadinessResponse};
use crate::lifecycle::LifecycleState;
use crate::state::AppState;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers `200 OK` while the process serves HTTP; dependencies are
/// not consulted.
///
/// # Response
///
/// ```json
/// { "status": "healthy", "container": "web-1" }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        container: state.instance_id.to_string(),
    })
}

/// Readiness probe with component checks.
///
/// # Endpoint
///
/// `GET /health/ready`
///
/// # Response Codes
///
/// - **200 OK**: Lifecycle is `ready`, database and cache answer
/// - **503 Service Unavailable**: Draining, or a dependency is unreachable
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let lifecycle_check = check_lifecycle(&state);
    let db_check = check_database(&state).await;
    let cache_check = check_cache(&state).await;

    let all_ok = lifecycle_check.is_ok() && db_check.is_ok() && cache_check.is_ok();

    let response = ReadinessResponse {
        status: if all_ok { "ready" } else { "degraded" }.to_string(),
        container: state.instance_id.to_string(),
        checks: ReadinessChecks {
            lifecycle: lifecycle_check,
            database: db_check,
            cache: cache_check,
        },
    };

    if all_ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_lifecycle(state: &AppState) -> CheckStatus {
    let current = *state.lifecycle.borrow();
    if current == LifecycleState::Ready {
        CheckStatus::ok(current.as_str())
    } else {
        CheckStatus::error(current.as_str())
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.visit_service.store_ready().await {
        Ok(()) => CheckStatus::ok("PostgreSQL connected"),
        Err(e) => {
            tracing::warn!(error = %e, "readiness: database check failed");
            CheckStatus::error("PostgreSQL unreachable")
        }
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    if state.visit_service.cache_ready().await {
        CheckStatus::ok("Redis connected")
    } else {
        CheckStatus::error("Redis connection failed")
    }
}
