use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{ClientError, ErrorBody};
use crate::models::{
    AnalyticsQuery, AnalyticsResult, BatchPredictionRequest, ForecastResponse, HealthStatus,
    ItemCatalog, ModelInfo, PredictionRequest, PredictionResult, StoreCatalog,
};

/// Typed client for the forecasting service.
///
/// Owns the base URL and a `reqwest` client carrying the per-request
/// deadline. Every call funnels its outcome through the error classifier, so
/// callers only ever see [`ClientError`] categories.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: Url,
}

impl ForecastClient {
    /// Build a client from configuration, with the configured timeout applied
    /// to every request.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::fault(format!("failed to construct HTTP client: {e}")))?;
        Self::with_client(&config.base_url, http)
    }

    /// Build a client around an existing `reqwest` client (useful for
    /// testing and for callers that manage their own connection pool).
    pub fn with_client(base_url: &str, http: Client) -> Result<Self, ClientError> {
        // A trailing slash makes Url::join treat every endpoint as relative.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| ClientError::fault(format!("invalid base URL '{base_url}': {e}")))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json("health", &[], "Health check failed").await
    }

    /// `GET /model`
    pub async fn model_info(&self) -> Result<ModelInfo, ClientError> {
        self.get_json("model", &[], "Failed to fetch model information")
            .await
    }

    /// `POST /predict`
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ClientError> {
        self.post_json("predict", request, "Prediction failed").await
    }

    /// `GET /forecast/{store}/{item}?days=N[&start_date=...]`
    pub async fn forecast(
        &self,
        store: i64,
        item: i64,
        days: u32,
        start_date: Option<NaiveDate>,
    ) -> Result<ForecastResponse, ClientError> {
        let mut query = vec![("days", days.to_string())];
        if let Some(start) = start_date {
            query.push(("start_date", start.to_string()));
        }
        self.get_json(&format!("forecast/{store}/{item}"), &query, "Forecast failed")
            .await
    }

    /// `GET /analytics/{store}/{item}?days=N`
    pub async fn analytics(&self, query: &AnalyticsQuery) -> Result<AnalyticsResult, ClientError> {
        self.get_json(
            &format!("analytics/{}/{}", query.store, query.item),
            &[("days", query.days.to_string())],
            "Failed to fetch analytics",
        )
        .await
    }

    /// `GET /stores`
    pub async fn stores(&self) -> Result<StoreCatalog, ClientError> {
        self.get_json("stores", &[], "Failed to list stores").await
    }

    /// `GET /items`
    pub async fn items(&self) -> Result<ItemCatalog, ClientError> {
        self.get_json("items", &[], "Failed to list items").await
    }

    /// `POST /batch-predict`
    pub async fn predict_batch(
        &self,
        request: &BatchPredictionRequest,
    ) -> Result<Vec<PredictionResult>, ClientError> {
        self.post_json("batch-predict", request, "Batch prediction failed")
            .await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::fault(format!("invalid endpoint path '{path}': {e}")))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, ClientError> {
        let endpoint = self.endpoint(path)?;
        debug!(%endpoint, "dispatching GET");
        let response = self
            .http
            .get(endpoint.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(endpoint.as_str(), &e))?;
        Self::decode(endpoint, response, fallback).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = self.endpoint(path)?;
        debug!(%endpoint, "dispatching POST");
        let response = self
            .http
            .post(endpoint.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(endpoint.as_str(), &e))?;
        Self::decode(endpoint, response, fallback).await
    }

    /// Shared response handling: a non-2xx status classifies as a server
    /// error carrying the body's `detail` when present, before any
    /// transport-level classification can apply.
    async fn decode<T: DeserializeOwned>(
        endpoint: Url,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            let classified = ClientError::from_response(status, detail, fallback);
            error!(%endpoint, category = classified.category(), "request failed");
            return Err(classified);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::from_transport(endpoint.as_str(), &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoints_against_trailing_slash_base() {
        let client =
            ForecastClient::with_client("http://localhost:8000", Client::new()).unwrap();
        assert_eq!(
            client.endpoint("forecast/1/2").unwrap().as_str(),
            "http://localhost:8000/forecast/1/2"
        );

        let client =
            ForecastClient::with_client("http://localhost:8000/", Client::new()).unwrap();
        assert_eq!(
            client.endpoint("health").unwrap().as_str(),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = ForecastClient::with_client("not a url", Client::new()).unwrap_err();
        assert!(matches!(err, ClientError::ClientFault(_)));
    }
}
