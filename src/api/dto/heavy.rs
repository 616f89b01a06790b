//! DTO for the synthetic CPU load endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HeavyResponse {
    pub message: String,
    pub duration_ms: u64,
    pub result: f64,
    pub container: String,
}
