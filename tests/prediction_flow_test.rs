mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use forecast_client::models::PredictionRequest;
use forecast_client::{ClientError, PredictionOrchestrator, RequestState};

use common::{client_for, forecast_body, prediction_body};

fn request() -> PredictionRequest {
    PredictionRequest::from_input("1", "1", "2024-01-01").expect("valid input")
}

#[tokio::test]
async fn resolves_with_prediction_and_seven_day_forecast() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"store": 1, "item": 1, "date": "2024-01-01"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(prediction_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast/1/1"))
        .and(query_param("days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .expect(1)
        .mount(&server)
        .await;

    let mut orchestrator = PredictionOrchestrator::new(Arc::new(client_for(&server.uri())));
    let state = orchestrator.submit(request()).await;

    let outcome = state.value().expect("resolved");
    assert_eq!(outcome.prediction.predicted_sales, 42.0);
    assert_eq!(outcome.prediction.recommended_inventory, 50);
    assert_eq!(outcome.prediction.confidence_lower, 30.0);
    assert_eq!(outcome.prediction.confidence_upper, 55.0);
    assert_eq!(outcome.forecast.len(), 7);
    assert_eq!(outcome.forecast[0].date, "2024-01-02");
    assert!(orchestrator.state().is_resolved());
}

#[tokio::test]
async fn server_error_short_circuits_before_the_forecast_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "model unavailable"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // The dependent forecast call must never be issued.
    Mock::given(method("GET"))
        .and(path("/forecast/1/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .expect(0)
        .mount(&server)
        .await;

    let mut orchestrator = PredictionOrchestrator::new(Arc::new(client_for(&server.uri())));
    let state = orchestrator.submit(request()).await;

    assert_matches!(
        state,
        RequestState::Failed(ClientError::ServerError { status: 500, message, .. })
            if message == "model unavailable"
    );
}

#[tokio::test]
async fn forecast_failure_discards_the_point_prediction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(prediction_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast/1/1"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"detail": "Data not loaded"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut orchestrator = PredictionOrchestrator::new(Arc::new(client_for(&server.uri())));
    let state = orchestrator.submit(request()).await;

    // No partial credit: the successful point prediction is not surfaced.
    assert_matches!(
        state,
        RequestState::Failed(ClientError::ServerError { status: 503, message, .. })
            if message == "Data not loaded"
    );
}

#[tokio::test]
async fn out_of_range_store_fails_before_anything_is_dispatched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(prediction_body()))
        .expect(0)
        .mount(&server)
        .await;

    let bad_request = PredictionRequest::from_input("11", "1", "2024-01-01").expect("coercible");
    let mut orchestrator = PredictionOrchestrator::new(Arc::new(client_for(&server.uri())));
    let state = orchestrator.submit(bad_request).await;

    assert_matches!(state, RequestState::Failed(ClientError::ClientFault(_)));
}

#[tokio::test]
async fn empty_forecast_is_a_valid_resolved_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(prediction_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast/1/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(0)))
        .mount(&server)
        .await;

    let mut orchestrator = PredictionOrchestrator::new(Arc::new(client_for(&server.uri())));
    let state = orchestrator.submit(request()).await;

    let outcome = state.value().expect("resolved");
    assert!(outcome.forecast.is_empty());
}

#[tokio::test]
async fn identical_submissions_resolve_to_structurally_equal_states() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(prediction_body()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast/1/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(7)))
        .expect(2)
        .mount(&server)
        .await;

    let mut orchestrator = PredictionOrchestrator::new(Arc::new(client_for(&server.uri())));
    let first = orchestrator.submit(request()).await.clone();
    let second = orchestrator.submit(request()).await.clone();

    assert!(first.is_resolved());
    assert_eq!(first, second);
}
