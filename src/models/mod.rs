/*!
 * # Wire Models
 *
 * Request and response types exchanged with the forecasting service, plus
 * the domain range constants the service enforces. All response types pass
 * numbers through exactly as received; derived figures (e.g. the R² score
 * rendered as a percentage) are a presentation concern.
 */

pub mod analytics;
pub mod health;
pub mod prediction;

pub use analytics::{AnalyticsQuery, AnalyticsResult, HistoricalPoint, SalesStatistics, Trend};
pub use health::{HealthStatus, ItemCatalog, ModelInfo, StoreCatalog};
pub use prediction::{
    BatchPredictionRequest, ForecastResponse, PredictionRequest, PredictionResult,
};

/// Store IDs accepted by the service.
pub const MIN_STORE_ID: i64 = 1;
pub const MAX_STORE_ID: i64 = 10;

/// Item IDs accepted by the service.
pub const MIN_ITEM_ID: i64 = 1;
pub const MAX_ITEM_ID: i64 = 50;

/// Horizon bounds: explicit forecasts are capped at 30 days, analytics
/// history at a year.
pub const MAX_FORECAST_DAYS: u32 = 30;
pub const MAX_ANALYTICS_DAYS: u32 = 365;
pub const DEFAULT_ANALYTICS_DAYS: u32 = 90;

/// Fixed horizon used by the prediction flow's dependent forecast call.
pub const FORECAST_HORIZON_DAYS: u32 = 7;

/// Upper bound on entries in a single batch prediction request.
pub const MAX_BATCH_SIZE: usize = 100;
