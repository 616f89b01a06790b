//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Visit`] - A persisted visit record
//! - [`VisitCount`] - A counter value tagged with where it was read from
//! - [`Pagination`] / [`VisitPage`] - Listing window and its result
//!
//! Creation inputs are separate structs (`NewVisit`) so that store-assigned
//! fields can never be supplied by a caller.

pub mod page;
pub mod visit;
pub mod visit_count;

pub use page::{Pagination, VisitPage};
pub use visit::{NewVisit, UNKNOWN_USER_AGENT, Visit};
pub use visit_count::{CountSource, VisitCount};
