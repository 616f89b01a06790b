//! Per-client rate limiting for `/api/*` using a token bucket.

use anyhow::{Result, anyhow};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

use crate::config::Config;

pub type ApiRateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the rate limiter applied to API routes.
///
/// # Limits
///
/// - **Burst**: `RATE_LIMIT_MAX_REQUESTS` (default 100)
/// - **Refill**: one request every `RATE_LIMIT_WINDOW_SECS / RATE_LIMIT_MAX_REQUESTS`
///   seconds (default 9s), i.e. a full bucket per window
///
/// A client that drains the bucket at once and then keeps pace with the refill
/// gets at most `2 * RATE_LIMIT_MAX_REQUESTS - 1` requests through in any one
/// window (199 with the defaults); at a steady rate the ceiling is
/// `RATE_LIMIT_MAX_REQUESTS` per window.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Keys are the
/// peer IP address, so the server must be started with connect info.
///
/// # Errors
///
/// Returns an error if the quota is zero.
pub fn layer(config: &Config) -> Result<ApiRateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_replenish_secs())
        .burst_size(config.rate_limit_max_requests)
        .finish()
        .ok_or_else(|| anyhow!("Invalid rate limit configuration"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(window: u64, max: u32) -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            redis_url: "redis://localhost:6379/0".to_string(),
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            instance_id: "test".to_string(),
            cache_ttl_seconds: 10,
            db_max_connections: 1,
            db_connect_timeout: 1,
            db_idle_timeout: 30,
            db_max_lifetime: 1800,
            rate_limit_window_secs: window,
            rate_limit_max_requests: max,
        }
    }

    #[test]
    fn test_default_quota_refills_one_request_every_nine_seconds() {
        let config = config(900, 100);

        assert_eq!(config.rate_limit_replenish_secs(), 9);
        assert!(layer(&config).is_ok());
    }

    #[test]
    fn test_zero_quota_is_rejected() {
        assert!(layer(&config(900, 0)).is_err());
    }
}
