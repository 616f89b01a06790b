//! HTTP server initialization and runtime setup.
//!
//! Handles gateway connections, migrations, and the Axum server lifecycle
//! from startup through graceful shutdown.

use crate::application::services::VisitService;
use crate::config::Config;
use crate::infrastructure::persistence::PgVisitRepository;
use crate::lifecycle::Lifecycle;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache and PostgreSQL pool (fail fast if either is unreachable)
/// - Apply migrations
/// - Axum HTTP server with graceful shutdown
///
/// After the server stops accepting requests, the cache connection and the
/// pool are closed in that order.
///
/// # Errors
///
/// Returns an error if:
/// - A gateway connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let lifecycle = Lifecycle::new();
    let gateways = lifecycle.start(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&gateways.pool)
        .await
        .context("Failed to migrate")?;

    let repository = Arc::new(PgVisitRepository::new(Arc::new(gateways.pool.clone())));
    let visit_service = Arc::new(VisitService::new(
        repository,
        gateways.cache.clone(),
        config.cache_ttl_seconds,
    ));
    let state = AppState::new(
        visit_service,
        config.instance_id.as_str(),
        lifecycle.subscribe(),
    );

    let app = app_router(state, &config)?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    let served = axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(lifecycle.clone().shutdown_signal())
    .await;

    if let Err(e) = &served {
        tracing::error!(error = %e, "Server stopped with error");
    }

    lifecycle.drain(gateways).await;

    served.context("HTTP server error")
}
