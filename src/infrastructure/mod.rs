//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - Counter cache (Redis and in-process implementations)
//! - [`persistence`] - PostgreSQL pool and repository implementations

pub mod cache;
pub mod persistence;
