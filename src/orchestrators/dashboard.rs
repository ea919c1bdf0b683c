use std::sync::Arc;

use tracing::{instrument, warn};

use crate::client::ForecastClient;
use crate::models::{HealthStatus, ModelInfo};
use crate::state::{RequestSlot, RequestState};

/// Merged view-state for the dashboard: service health plus model quality
/// metrics. Both pieces are required for the dashboard to render
/// meaningfully, so partial success is never surfaced.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub health: HealthStatus,
    pub model: ModelInfo,
}

/// Loads health and model metadata concurrently on dashboard mount.
pub struct DashboardOrchestrator {
    client: Arc<ForecastClient>,
    slot: RequestSlot<DashboardSnapshot>,
}

impl DashboardOrchestrator {
    pub fn new(client: Arc<ForecastClient>) -> Self {
        Self {
            client,
            slot: RequestSlot::new(),
        }
    }

    /// Issue both lookups concurrently and wait for both to settle. If
    /// either fails the whole operation fails; on success the payloads are
    /// merged unmodified.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> &RequestState<DashboardSnapshot> {
        let ticket = self.slot.begin();
        let outcome = match tokio::try_join!(self.client.health(), self.client.model_info()) {
            Ok((health, model)) => Ok(DashboardSnapshot { health, model }),
            Err(error) => Err(error),
        };
        if !self.slot.settle(ticket, outcome) {
            warn!("dropping stale dashboard response");
        }
        self.slot.last_settled()
    }

    /// Current lifecycle phase of the dashboard request.
    pub fn state(&self) -> RequestState<&DashboardSnapshot> {
        self.slot.phase()
    }

    /// Last settled state, readable while a reload is pending.
    pub fn last_settled(&self) -> &RequestState<DashboardSnapshot> {
        self.slot.last_settled()
    }
}
