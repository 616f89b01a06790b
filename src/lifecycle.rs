//! Startup and shutdown of the shared network resources.
//!
//! The service moves through
//! `Uninitialized -> Connecting -> Ready -> Draining -> Stopped`.
//! There is no partial-ready state: if either gateway cannot be reached while
//! connecting, [`Lifecycle::start`] returns an error and the process exits.
//! On a termination signal the HTTP server stops accepting connections first,
//! then [`Lifecycle::drain`] closes the cache connection and the store pool,
//! in that order.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, RedisCache};
use crate::infrastructure::persistence::{PoolSettings, connect_pool, ping_pool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecycleState {
    Uninitialized,
    Connecting,
    Ready,
    Draining,
    Stopped,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Connecting => "connecting",
            Self::Ready => "ready",
            Self::Draining => "draining",
            Self::Stopped => "stopped",
        }
    }

    /// Whether `self` is the state directly after `current`.
    fn follows(self, current: LifecycleState) -> bool {
        matches!(
            (current, self),
            (Self::Uninitialized, Self::Connecting)
                | (Self::Connecting, Self::Ready)
                | (Self::Ready, Self::Draining)
                | (Self::Draining, Self::Stopped)
        )
    }
}

/// Connected cache and store handles.
pub struct Gateways {
    pub pool: PgPool,
    pub cache: Arc<dyn CacheService>,
}

/// Owner of the lifecycle state.
///
/// Clones share the same state; observers can [`subscribe`](Self::subscribe)
/// to follow transitions.
#[derive(Clone)]
pub struct Lifecycle {
    state: Arc<watch::Sender<LifecycleState>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(LifecycleState::Uninitialized);
        Self {
            state: Arc::new(tx),
        }
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Moves to `next` if it directly follows the current state.
    fn advance(&self, next: LifecycleState) -> bool {
        self.state.send_if_modified(|current| {
            if next.follows(*current) {
                info!(from = current.as_str(), to = next.as_str(), "Lifecycle transition");
                *current = next;
                true
            } else {
                warn!(
                    from = current.as_str(),
                    to = next.as_str(),
                    "Rejected lifecycle transition"
                );
                false
            }
        })
    }

    /// Connects the cache, then the store, and confirms both answer.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as either gateway is unreachable; the caller
    /// is expected to terminate.
    pub async fn start(&self, config: &Config) -> Result<Gateways> {
        self.advance(LifecycleState::Connecting);

        let cache = RedisCache::connect(&config.redis_url)
            .await
            .context("Failed to connect to Redis")?;

        let pool = connect_pool(&config.database_url, PoolSettings::from(config))
            .await
            .context("Failed to connect to PostgreSQL")?;
        ping_pool(&pool)
            .await
            .context("PostgreSQL liveness query failed")?;
        info!("Connected to PostgreSQL");

        info!("All connections established");
        self.advance(LifecycleState::Ready);

        Ok(Gateways {
            pool,
            cache: Arc::new(cache),
        })
    }

    /// Resolves once a termination signal arrives, after entering `Draining`.
    pub async fn shutdown_signal(self) {
        wait_for_signal().await;
        self.advance(LifecycleState::Draining);
    }

    /// Closes the cache connection, then the store pool.
    pub async fn drain(&self, gateways: Gateways) {
        gateways.cache.close().await;
        info!("Cache connection closed");

        gateways.pool.close().await;
        info!("Database pool closed");

        self.advance(LifecycleState::Stopped);
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl-C received, shutting down gracefully"),
        _ = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}
