//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements, plus construction of the bounded connection pool.
//!
//! # Repositories
//!
//! - [`PgVisitRepository`] - Visit storage, counting and paginated listing

pub mod pg_visit_repository;
pub mod pool;

pub use pg_visit_repository::PgVisitRepository;
pub use pool::{PoolSettings, connect_pool, ping_pool};
