use serde::{Deserialize, Serialize};

/// Health check response from `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    pub data_loaded: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Model metadata from `GET /model`.
///
/// `r2` is a fraction in [0, 1]; the presentation layer derives the
/// percentage, this type does not pre-compute it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub model_type: Option<String>,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    pub mape: f64,
    #[serde(default)]
    pub loaded: Option<bool>,
}

/// Catalog of available stores from `GET /stores`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoreCatalog {
    pub stores: Vec<i64>,
    pub count: usize,
}

/// Catalog of available items from `GET /items`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemCatalog {
    pub items: Vec<i64>,
    pub count: usize,
}
