use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{MAX_BATCH_SIZE, MAX_ITEM_ID, MAX_STORE_ID, MIN_ITEM_ID, MIN_STORE_ID};
use crate::errors::ClientError;

/// Body of `POST /predict`.
///
/// The UI layer may hold store and item as text while the operator edits
/// them; [`PredictionRequest::from_input`] coerces both to integers before
/// anything is dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(range(min = 1, max = 10))]
    pub store: i64,
    #[validate(range(min = 1, max = 50))]
    pub item: i64,
    pub date: NaiveDate,
}

impl PredictionRequest {
    pub fn new(store: i64, item: i64, date: NaiveDate) -> Self {
        Self { store, item, date }
    }

    /// Request dated with the current calendar date, matching the form's
    /// initial state.
    pub fn for_today(store: i64, item: i64) -> Self {
        Self::new(store, item, Utc::now().date_naive())
    }

    /// Coerce raw form input into a request.
    ///
    /// Store and item must parse as integers and the date as an ISO 8601
    /// calendar date; any violation is a [`ClientError::ClientFault`] raised
    /// before a request exists to dispatch.
    pub fn from_input(store: &str, item: &str, date: &str) -> Result<Self, ClientError> {
        let store: i64 = store
            .trim()
            .parse()
            .map_err(|_| ClientError::fault(format!("store must be an integer, got '{store}'")))?;
        let item: i64 = item
            .trim()
            .parse()
            .map_err(|_| ClientError::fault(format!("item must be an integer, got '{item}'")))?;
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ClientError::fault(format!("date must be YYYY-MM-DD, got '{date}'")))?;
        Ok(Self::new(store, item, date))
    }

    /// Range-check against the service's store/item domains.
    pub fn check(&self) -> Result<(), ClientError> {
        self.validate().map_err(|_| {
            ClientError::fault(format!(
                "store must be in [{MIN_STORE_ID}, {MAX_STORE_ID}] and item in [{MIN_ITEM_ID}, {MAX_ITEM_ID}]"
            ))
        })
    }
}

/// Body of `POST /batch-predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPredictionRequest {
    pub predictions: Vec<PredictionRequest>,
}

impl BatchPredictionRequest {
    pub fn new(predictions: Vec<PredictionRequest>) -> Result<Self, ClientError> {
        if predictions.is_empty() {
            return Err(ClientError::fault("batch must contain at least one request"));
        }
        if predictions.len() > MAX_BATCH_SIZE {
            return Err(ClientError::fault(format!(
                "batch size {} exceeds the maximum of {MAX_BATCH_SIZE}",
                predictions.len()
            )));
        }
        Ok(Self { predictions })
    }
}

/// Point prediction returned by `POST /predict`, and the per-day entry shape
/// inside a forecast.
///
/// The service is expected to keep `confidence_lower <= predicted_sales <=
/// confidence_upper`, but the bound is passed through unvalidated: a
/// violation is an upstream data-quality problem the client surfaces as-is
/// rather than silently correcting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub store: i64,
    pub item: i64,
    pub date: String,
    pub predicted_sales: f64,
    pub recommended_inventory: i64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
}

/// Envelope of `GET /forecast/{store}/{item}`.
///
/// `predictions` is chronological with one entry per requested day; an empty
/// sequence is a valid response and renders as nothing rather than erroring.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastResponse {
    pub store: i64,
    pub item: i64,
    pub forecast_days: u32,
    pub predictions: Vec<PredictionResult>,
}
