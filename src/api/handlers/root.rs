//! Service banner and fallback.

use axum::{Json, extract::State, http::Uri};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::api::dto::root::RootResponse;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /` - reports that the service is running and which instance answered.
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Scalable Application is Running!".to_string(),
        container_id: state.instance_id.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Fallback for unknown routes.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
