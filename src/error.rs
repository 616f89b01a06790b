//! Error taxonomy for the store gateway and the HTTP boundary.
//!
//! Store failures are classified into [`StoreError::Unavailable`] (the pool or
//! the server cannot service the request) and [`StoreError::Query`] (the
//! statement itself failed). Neither is recovered below the HTTP layer, where
//! [`AppError`] logs the cause and renders a generic body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Failures raised by the relational store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Pool exhausted, closed, or the server is unreachable.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Constraint violation, malformed statement, or a row that failed to decode.
    #[error("store query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::Unavailable(e),
            _ => Self::Query(e),
        }
    }
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

/// Status and body used for every failure whose detail must stay server-side.
pub fn internal_error_response() -> Response {
    let body = ErrorBody {
        error: ErrorInfo {
            code: "internal_error",
            message: "Internal server error".to_string(),
            details: json!({}),
        },
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "request failed");
                return internal_error_response();
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, unavailable = e.is_unavailable(), "store operation failed");
                return internal_error_response();
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
