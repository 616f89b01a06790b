//! Synthetic CPU-bound endpoint for load testing.

use std::time::Instant;

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::heavy::HeavyResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Number of square roots summed per request.
pub const HEAVY_ITERATIONS: u64 = 10_000_000;

/// Sums `sqrt(i)` for `i` in `0..iterations`.
pub fn heavy_computation(iterations: u64) -> f64 {
    (0..iterations).map(|i| (i as f64).sqrt()).sum()
}

/// Burns CPU to exercise autoscaling.
///
/// # Endpoint
///
/// `GET /api/heavy`
///
/// The work runs on the blocking thread pool so async workers keep serving
/// other requests.
pub async fn heavy_handler(State(state): State<AppState>) -> Result<Json<HeavyResponse>, AppError> {
    let start = Instant::now();

    let result = tokio::task::spawn_blocking(|| heavy_computation(HEAVY_ITERATIONS))
        .await
        .map_err(|e| {
            AppError::internal("Heavy computation failed", json!({ "reason": e.to_string() }))
        })?;

    Ok(Json(HeavyResponse {
        message: "Heavy computation completed".to_string(),
        duration_ms: start.elapsed().as_millis() as u64,
        result,
        container: state.instance_id.to_string(),
    }))
}
