use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{DEFAULT_ANALYTICS_DAYS, MAX_ANALYTICS_DAYS};
use crate::errors::ClientError;

/// Parameters of `GET /analytics/{store}/{item}?days=N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct AnalyticsQuery {
    #[validate(range(min = 1, max = 10))]
    pub store: i64,
    #[validate(range(min = 1, max = 50))]
    pub item: i64,
    #[validate(range(min = 1, max = 365))]
    pub days: u32,
}

impl AnalyticsQuery {
    pub fn new(store: i64, item: i64, days: u32) -> Self {
        Self { store, item, days }
    }

    /// Coerce raw form input; store and item may arrive as text.
    pub fn from_input(store: &str, item: &str, days: &str) -> Result<Self, ClientError> {
        let store: i64 = store
            .trim()
            .parse()
            .map_err(|_| ClientError::fault(format!("store must be an integer, got '{store}'")))?;
        let item: i64 = item
            .trim()
            .parse()
            .map_err(|_| ClientError::fault(format!("item must be an integer, got '{item}'")))?;
        let days: u32 = days
            .trim()
            .parse()
            .map_err(|_| ClientError::fault(format!("days must be an integer, got '{days}'")))?;
        Ok(Self::new(store, item, days))
    }

    pub fn check(&self) -> Result<(), ClientError> {
        self.validate().map_err(|_| {
            ClientError::fault(format!(
                "store, item or days out of range (days must be in [1, {MAX_ANALYTICS_DAYS}])"
            ))
        })
    }
}

impl Default for AnalyticsQuery {
    fn default() -> Self {
        Self::new(1, 1, DEFAULT_ANALYTICS_DAYS)
    }
}

/// Sales trend over the requested history window.
///
/// The service emits one of three known labels. The enumeration is closed
/// with an explicit [`Trend::Unknown`] fallback so that a new service-side
/// label renders as a neutral indicator instead of failing deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    #[serde(other)]
    #[default]
    Unknown,
}

/// Aggregate statistics over the history window, passed through unmodified
/// from the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SalesStatistics {
    pub mean_sales: f64,
    pub median_sales: f64,
    pub std_sales: f64,
    pub min_sales: f64,
    pub max_sales: f64,
}

/// One day of sales history, chart-ready.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoricalPoint {
    pub date: String,
    pub sales: f64,
}

/// Response of `GET /analytics/{store}/{item}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyticsResult {
    pub store: i64,
    pub item: i64,
    pub statistics: SalesStatistics,
    pub trend: Trend,
    pub historical_data: Vec<HistoricalPoint>,
}
