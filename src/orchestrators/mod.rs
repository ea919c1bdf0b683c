/*!
 * # Orchestrators
 *
 * The three sibling units that turn validated input into outbound requests
 * and fold the outcome into a single owned state slot:
 *
 * - [`DashboardOrchestrator`] - concurrent health + model lookups with
 *   all-or-nothing join semantics
 * - [`PredictionOrchestrator`] - point prediction followed by a dependent
 *   fixed-horizon forecast
 * - [`AnalyticsOrchestrator`] - a single historical-statistics lookup
 *
 * None of them calls another; failures never cross orchestrator boundaries.
 */

pub mod analytics;
pub mod dashboard;
pub mod prediction;

pub use analytics::AnalyticsOrchestrator;
pub use dashboard::{DashboardOrchestrator, DashboardSnapshot};
pub use prediction::{PredictionOrchestrator, PredictionOutcome};
