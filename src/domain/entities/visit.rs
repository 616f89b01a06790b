//! Visit entity representing a single recorded page visit.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User agent stored when the client does not report one.
pub const UNKNOWN_USER_AGENT: &str = "unknown";

/// A visit recorded in the store.
///
/// `id` and `visit_time` are assigned by the database on insert and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visit {
    pub id: i64,
    pub user_agent: String,
    pub ip_address: Option<String>,
    pub visit_time: DateTime<Utc>,
}

impl Visit {
    pub fn new(
        id: i64,
        user_agent: String,
        ip_address: Option<String>,
        visit_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_agent,
            ip_address,
            visit_time,
        }
    }
}

/// Input data for recording a new visit.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVisit {
    pub user_agent: String,
    pub ip_address: Option<String>,
}

impl NewVisit {
    /// Builds an insert payload, substituting [`UNKNOWN_USER_AGENT`] when the
    /// user agent is missing.
    pub fn new(user_agent: Option<String>, ip_address: Option<String>) -> Self {
        Self {
            user_agent: user_agent.unwrap_or_else(|| UNKNOWN_USER_AGENT.to_string()),
            ip_address,
        }
    }
}
