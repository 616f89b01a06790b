//! DTO for the service banner.

use serde::Serialize;

/// Banner returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub container_id: String,
    /// RFC 3339 with millisecond precision.
    pub timestamp: String,
}
