//! Daily water balance simulation for household rainwater harvesting and
//! greywater reuse.
//!
//! Provides:
//! - Seasonal rainfall model with a run-scoped, seeded random stream
//! - Water balance calculators (harvest, greywater recovery, treatment)
//! - Bounded storage tank with overflow/deficit accounting
//! - Day-stepped engine folding days into a `SimulationResult`
//! - Summary metrics with fixed output precision

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod metrics;
pub mod rainfall;
pub mod sim;
pub mod tank;

// Re-exports for public API
pub use config::SimulationConfig;
pub use error::{SimError, SimResult};
pub use metrics::SummaryMetrics;
pub use rainfall::{MonthlyRainfallProfile, SeasonalRainfallModel, month_for_day};
pub use sim::{DayRecord, RunTotals, SimulationEngine, SimulationResult, run};
pub use tank::{StorageTank, TankState, TankStep};
