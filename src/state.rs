//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::watch;

use crate::application::services::VisitService;
use crate::infrastructure::persistence::PgVisitRepository;
use crate::lifecycle::LifecycleState;

/// Handles shared by all requests.
///
/// Built once at startup from the connected gateways; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub visit_service: Arc<VisitService<PgVisitRepository>>,
    /// Reported as `container` / `container_id` in responses.
    pub instance_id: Arc<str>,
    pub lifecycle: watch::Receiver<LifecycleState>,
}

impl AppState {
    pub fn new(
        visit_service: Arc<VisitService<PgVisitRepository>>,
        instance_id: impl Into<Arc<str>>,
        lifecycle: watch::Receiver<LifecycleState>,
    ) -> Self {
        Self {
            visit_service,
            instance_id: instance_id.into(),
            lifecycle,
        }
    }
}
