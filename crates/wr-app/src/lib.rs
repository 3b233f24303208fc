//! Shared application service layer for the water reuse simulator.
//!
//! Centralizes project loading, scenario compilation, simulation runs
//! and sweeps, result queries and the water quality workflow so the CLI
//! stays a thin presentation layer.

pub mod error;
pub mod project_service;
pub mod quality_service;
pub mod query;
pub mod run_service;
pub mod scenario_compile;

pub use error::{AppError, AppResult};
pub use project_service::{
    ScenarioSummary, get_scenario, list_scenarios, load_project, save_project, validate_project,
};
pub use quality_service::{QualityReport, classify_reading, quality_report, reading_stats};
pub use query::{
    DAY_SERIES_VARIABLES, MonthlyBreakdown, REUSE_SPLIT, ReuseShare, extract_day_series,
    monthly_breakdown, reuse_breakdown,
};
pub use run_service::{
    RunOptions, RunReport, run_compiled, run_scenario, run_seed_sweep, run_sweep,
};
pub use scenario_compile::{CompiledScenario, compile_project, compile_scenario};
