//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! See integration tests in `tests/repository_visit.rs` for usage examples.

pub mod visit_repository;

pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use visit_repository::MockVisitRepository;
