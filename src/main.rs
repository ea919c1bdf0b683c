use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

use forecast_client as api;
use forecast_client::models::{AnalyticsQuery, PredictionRequest, DEFAULT_ANALYTICS_DAYS};
use forecast_client::{
    AnalyticsOrchestrator, DashboardOrchestrator, ForecastClient, PredictionOrchestrator,
    RequestState,
};

#[derive(Parser)]
#[command(name = "forecast-client", version, about = "CLI for the inventory demand forecasting API")]
struct Cli {
    /// Override the configured base URL of the forecasting service
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show service health and model quality metrics
    Dashboard,
    /// Predict sales for a store/item on a date, with a 7-day forecast
    Predict {
        /// Store ID (1-10)
        store: String,
        /// Item ID (1-50)
        item: String,
        /// Date as YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Historical statistics and trend for a store/item
    Analytics {
        /// Store ID (1-10)
        store: String,
        /// Item ID (1-50)
        item: String,
        /// Days of history (1-365)
        #[arg(long, default_value_t = DEFAULT_ANALYTICS_DAYS)]
        days: u32,
    },
    /// List available store IDs
    Stores,
    /// List available item IDs
    Items,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = api::load_config().context("failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    api::config::init_tracing(&config.log_level);
    info!(base_url = %config.base_url, "using forecasting service");

    let client = Arc::new(ForecastClient::new(&config)?);

    match cli.command {
        Commands::Dashboard => run_dashboard(client).await,
        Commands::Predict { store, item, date } => run_predict(client, &store, &item, date).await,
        Commands::Analytics { store, item, days } => {
            run_analytics(client, &store, &item, days).await
        }
        Commands::Stores => {
            let catalog = client.stores().await?;
            println!("{} stores: {:?}", catalog.count, catalog.stores);
            Ok(())
        }
        Commands::Items => {
            let catalog = client.items().await?;
            println!("{} items: {:?}", catalog.count, catalog.items);
            Ok(())
        }
    }
}

async fn run_dashboard(client: Arc<ForecastClient>) -> anyhow::Result<()> {
    let mut dashboard = DashboardOrchestrator::new(client);
    match dashboard.load().await {
        RequestState::Resolved(snapshot) => {
            println!("Service status:  {}", snapshot.health.status);
            println!("Model loaded:    {}", flag(snapshot.health.model_loaded));
            println!("Data loaded:     {}", flag(snapshot.health.data_loaded));
            println!();
            // r2 arrives as a fraction; the percentage is a display derivation
            println!(
                "R2 score:        {:.3} ({:.1}%)",
                snapshot.model.r2,
                snapshot.model.r2 * 100.0
            );
            println!("RMSE:            {:.2}", snapshot.model.rmse);
            println!("MAE:             {:.2}", snapshot.model.mae);
            println!("MAPE:            {:.2}%", snapshot.model.mape);
            Ok(())
        }
        RequestState::Failed(error) => bail!("{error}"),
        RequestState::Idle | RequestState::Pending => unreachable!("load always settles"),
    }
}

async fn run_predict(
    client: Arc<ForecastClient>,
    store: &str,
    item: &str,
    date: Option<String>,
) -> anyhow::Result<()> {
    // The form's default date is the current calendar date.
    let date = date.unwrap_or_else(|| Utc::now().date_naive().to_string());
    let request = PredictionRequest::from_input(store, item, &date)?;

    let mut orchestrator = PredictionOrchestrator::new(client);
    match orchestrator.submit(request).await {
        RequestState::Resolved(outcome) => {
            let p = &outcome.prediction;
            println!("Predicted sales:        {:.2}", p.predicted_sales);
            println!("Recommended inventory:  {}", p.recommended_inventory);
            println!(
                "95% confidence:         [{:.2}, {:.2}]",
                p.confidence_lower, p.confidence_upper
            );
            if !outcome.forecast.is_empty() {
                println!();
                println!("{}-day forecast:", outcome.forecast.len());
                for point in &outcome.forecast {
                    println!(
                        "  {}  {:8.2}  [{:.2}, {:.2}]",
                        point.date, point.predicted_sales, point.confidence_lower,
                        point.confidence_upper
                    );
                }
            }
            Ok(())
        }
        RequestState::Failed(error) => bail!("{error}"),
        RequestState::Idle | RequestState::Pending => unreachable!("submit always settles"),
    }
}

async fn run_analytics(
    client: Arc<ForecastClient>,
    store: &str,
    item: &str,
    days: u32,
) -> anyhow::Result<()> {
    let query = AnalyticsQuery::from_input(store, item, &days.to_string())?;

    let mut orchestrator = AnalyticsOrchestrator::new(client);
    match orchestrator.submit(query).await {
        RequestState::Resolved(result) => {
            let stats = &result.statistics;
            println!("Trend:        {}", result.trend);
            println!("Mean sales:   {:.2}", stats.mean_sales);
            println!("Median sales: {:.2}", stats.median_sales);
            println!("Std dev:      {:.2}", stats.std_sales);
            println!("Min / max:    {:.2} / {:.2}", stats.min_sales, stats.max_sales);
            println!("History:      {} days", result.historical_data.len());
            Ok(())
        }
        RequestState::Failed(error) => bail!("{error}"),
        RequestState::Idle | RequestState::Pending => unreachable!("submit always settles"),
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
