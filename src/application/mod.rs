//! Application layer services implementing business logic.
//!
//! This layer orchestrates the store and the cache. Services consume the
//! repository and cache traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::visit_service::VisitService`] - Visit recording, cached counting and listing

pub mod services;
