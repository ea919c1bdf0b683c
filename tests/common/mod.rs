#![allow(dead_code)]

use serde_json::{json, Value};

use forecast_client::{ClientConfig, ForecastClient};

/// Client pointed at a stub server, with a short deadline so failure tests
/// stay fast.
pub fn client_for(uri: &str) -> ForecastClient {
    client_with_timeout(uri, 2)
}

pub fn client_with_timeout(uri: &str, timeout_secs: u64) -> ForecastClient {
    let config = ClientConfig {
        base_url: uri.to_string(),
        timeout_secs,
        ..ClientConfig::default()
    };
    ForecastClient::new(&config).expect("construct client")
}

pub fn health_body() -> Value {
    json!({
        "status": "healthy",
        "model_loaded": true,
        "data_loaded": true,
        "timestamp": "2024-01-01T00:00:00"
    })
}

pub fn model_body() -> Value {
    json!({
        "name": "xgboost",
        "type": "XGBoost Regressor",
        "rmse": 10.23,
        "mae": 7.45,
        "r2": 0.884,
        "mape": 14.68,
        "loaded": true
    })
}

pub fn prediction_body() -> Value {
    json!({
        "store": 1,
        "item": 1,
        "date": "2024-01-01",
        "predicted_sales": 42.0,
        "recommended_inventory": 50,
        "confidence_lower": 30.0,
        "confidence_upper": 55.0
    })
}

/// A chronological forecast envelope with one entry per day.
pub fn forecast_body(days: u32) -> Value {
    let predictions: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "store": 1,
                "item": 1,
                "date": format!("2024-01-{:02}", day + 1),
                "predicted_sales": 40.0 + day as f64,
                "recommended_inventory": 48 + day as i64,
                "confidence_lower": 28.0 + day as f64,
                "confidence_upper": 53.0 + day as f64
            })
        })
        .collect();
    json!({
        "store": 1,
        "item": 1,
        "forecast_days": days,
        "predictions": predictions
    })
}

pub fn analytics_body(trend: &str) -> Value {
    json!({
        "store": 1,
        "item": 1,
        "statistics": {
            "mean_sales": 120.5,
            "median_sales": 118.0,
            "std_sales": 14.2,
            "min_sales": 80.0,
            "max_sales": 161.0
        },
        "trend": trend,
        "historical_data": [
            {"date": "2024-01-01", "sales": 110.0},
            {"date": "2024-01-02", "sales": 124.0}
        ]
    })
}
