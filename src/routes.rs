//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Service banner (public)
//! - `GET  /health`        - Liveness (public)
//! - `GET  /health/ready`  - Readiness: lifecycle, database, cache (public)
//! - `/api/*`              - Visit API (rate limited per client IP)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic boundary** - Panics become the generic 500 response
//! - **CORS / security headers** - Permissive CORS, hardened response headers
//! - **Rate limiting** - Per-IP token bucket on `/api/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, readiness_handler, root_handler};
use crate::api::middleware::{rate_limit, security, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let api_router = api::routes::api_routes().layer(rate_limit::layer(config)?);

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .nest("/api", api_router)
        .fallback(not_found_handler)
        .with_state(state);

    let router = security::with_security_headers(router)
        .layer(security::cors_layer())
        .layer(security::catch_panic_layer())
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
