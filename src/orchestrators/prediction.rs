use std::sync::Arc;

use tracing::{instrument, warn};

use crate::client::ForecastClient;
use crate::errors::ClientError;
use crate::models::{PredictionRequest, PredictionResult, FORECAST_HORIZON_DAYS};
use crate::state::{RequestSlot, RequestState};

/// Result of a full prediction submission: the point prediction and the
/// dependent fixed-horizon forecast, chronological. An empty forecast is a
/// valid resolved state and renders as nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub prediction: PredictionResult,
    pub forecast: Vec<PredictionResult>,
}

/// Submits a point prediction, then a 7-day forecast contingent on its
/// success.
///
/// The two calls are causally dependent: the forecast is never issued before
/// the prediction resolves, and a failure at either step short-circuits the
/// whole submission to a single failed state. A forecast failure after a
/// successful point prediction discards the prediction entirely - there is
/// no partial credit for a partial chain.
pub struct PredictionOrchestrator {
    client: Arc<ForecastClient>,
    slot: RequestSlot<PredictionOutcome>,
}

impl PredictionOrchestrator {
    pub fn new(client: Arc<ForecastClient>) -> Self {
        Self {
            client,
            slot: RequestSlot::new(),
        }
    }

    #[instrument(skip(self, request), fields(store = request.store, item = request.item))]
    pub async fn submit(&mut self, request: PredictionRequest) -> &RequestState<PredictionOutcome> {
        let ticket = self.slot.begin();
        let outcome = self.run(&request).await;
        if !self.slot.settle(ticket, outcome) {
            warn!("dropping stale prediction response");
        }
        self.slot.last_settled()
    }

    async fn run(&self, request: &PredictionRequest) -> Result<PredictionOutcome, ClientError> {
        request.check()?;
        let prediction = self.client.predict(request).await?;
        let forecast = self
            .client
            .forecast(request.store, request.item, FORECAST_HORIZON_DAYS, None)
            .await?;
        Ok(PredictionOutcome {
            prediction,
            forecast: forecast.predictions,
        })
    }

    pub fn state(&self) -> RequestState<&PredictionOutcome> {
        self.slot.phase()
    }

    pub fn last_settled(&self) -> &RequestState<PredictionOutcome> {
        self.slot.last_settled()
    }
}
