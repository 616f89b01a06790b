//! Domain layer containing business entities and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Visit records, counter snapshots and pagination values
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
