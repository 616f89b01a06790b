//! Visit counter snapshot.

use serde::Serialize;

/// Where a counter value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountSource {
    Cache,
    Database,
}

/// Total number of visits together with its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitCount {
    pub count: i64,
    pub source: CountSource,
}

impl VisitCount {
    pub fn from_cache(count: i64) -> Self {
        Self {
            count,
            source: CountSource::Cache,
        }
    }

    pub fn from_database(count: i64) -> Self {
        Self {
            count,
            source: CountSource::Database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(serde_json::to_value(CountSource::Cache).unwrap(), "cache");
        assert_eq!(
            serde_json::to_value(CountSource::Database).unwrap(),
            "database"
        );
    }
}
