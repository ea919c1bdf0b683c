use std::sync::Arc;

use tracing::{instrument, warn};

use crate::client::ForecastClient;
use crate::errors::ClientError;
use crate::models::{AnalyticsQuery, AnalyticsResult};
use crate::state::{RequestSlot, RequestState};

/// Submits a single historical-statistics request.
///
/// Statistics and history pass through unmodified; the only mapping applied
/// is the trend label's classification into the closed [`crate::models::Trend`]
/// enumeration, which happens during decoding and never fails.
pub struct AnalyticsOrchestrator {
    client: Arc<ForecastClient>,
    slot: RequestSlot<AnalyticsResult>,
}

impl AnalyticsOrchestrator {
    pub fn new(client: Arc<ForecastClient>) -> Self {
        Self {
            client,
            slot: RequestSlot::new(),
        }
    }

    #[instrument(skip(self, query), fields(store = query.store, item = query.item, days = query.days))]
    pub async fn submit(&mut self, query: AnalyticsQuery) -> &RequestState<AnalyticsResult> {
        let ticket = self.slot.begin();
        let outcome = self.run(&query).await;
        if !self.slot.settle(ticket, outcome) {
            warn!("dropping stale analytics response");
        }
        self.slot.last_settled()
    }

    async fn run(&self, query: &AnalyticsQuery) -> Result<AnalyticsResult, ClientError> {
        query.check()?;
        self.client.analytics(query).await
    }

    pub fn state(&self) -> RequestState<&AnalyticsResult> {
        self.slot.phase()
    }

    pub fn last_settled(&self) -> &RequestState<AnalyticsResult> {
        self.slot.last_settled()
    }
}
