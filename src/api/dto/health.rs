//! DTOs for liveness and readiness endpoints.

use serde::Serialize;

/// Liveness response: the process is up and serving HTTP.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub container: String,
}

/// Readiness response with component status.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub container: String,
    pub checks: ReadinessChecks,
}

/// Health status for each dependency.
#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub lifecycle: CheckStatus,
    pub database: CheckStatus,
    pub cache: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
