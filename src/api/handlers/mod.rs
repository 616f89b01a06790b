//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod heavy;
pub mod root;
pub mod visits;

pub use health::{health_handler, readiness_handler};
pub use heavy::heavy_handler;
pub use root::{not_found_handler, root_handler};
pub use visits::{list_visits_handler, record_visit_handler, visit_count_handler};
