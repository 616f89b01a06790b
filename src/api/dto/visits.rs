//! DTOs for recording and counting visits.

use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CountSource, Visit};

/// Body of `POST /api/visit`. Both fields are optional and the body itself may
/// be omitted.
///
/// Only JSON bodies are read; any other content type counts as no fields
/// supplied.
#[derive(Debug, Default, Deserialize)]
pub struct RecordVisitRequest {
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl RecordVisitRequest {
    /// Parses the request body when it is declared as JSON.
    ///
    /// Non-JSON, missing content type, and empty bodies yield the default.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, serde_json::Error> {
        if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[derive(Debug, Serialize)]
pub struct RecordVisitResponse {
    pub success: bool,
    pub visit: Visit,
    pub container: String,
}

#[derive(Debug, Serialize)]
pub struct VisitCountResponse {
    pub visits: i64,
    pub source: CountSource,
    pub container: String,
}
