//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting, response hardening and observability middleware.

pub mod rate_limit;
pub mod security;
pub mod tracing;
