//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Every response
//! carries the instance identifier so callers behind a load balancer can tell
//! which replica answered.

pub mod health;
pub mod heavy;
pub mod pagination;
pub mod root;
pub mod visits;
