//! Forecast Client Library
//!
//! Request orchestration and presentation state for the inventory demand
//! forecasting API: typed endpoint calls, deterministic error
//! classification, and chart-ready result state for a display layer.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod orchestrators;
pub mod state;

pub use client::ForecastClient;
pub use config::{load_config, ClientConfig, ClientConfigError};
pub use errors::ClientError;
pub use orchestrators::{
    AnalyticsOrchestrator, DashboardOrchestrator, DashboardSnapshot, PredictionOrchestrator,
    PredictionOutcome,
};
pub use state::{RequestSlot, RequestState};
