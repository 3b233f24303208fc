//! Day-stepped simulation engine.
//!
//! One run is a fold over the day sequence: each step draws rainfall,
//! computes the day's water balance, pushes it through the tank and emits a
//! [`DayRecord`]. [`RunTotals`] plus the day log form the accumulator.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::balance::{
    after_treatment_l, greywater_recovered_l, household_demand_l, rainwater_harvested_l,
};
use crate::config::SimulationConfig;
use crate::error::SimResult;
use crate::metrics::SummaryMetrics;
use crate::rainfall::{MonthlyRainfallProfile, SeasonalRainfallModel};
use crate::tank::{StorageTank, TankStep};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Water balance of a single simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// 1-based day index
    pub day: u32,
    pub rainfall_mm: f64,
    pub rainwater_l: f64,
    pub greywater_l: f64,
    pub treated_l: f64,
    /// Tank level at the end of the day
    pub storage_l: f64,
    pub supplied_l: f64,
    pub deficit_l: f64,
    pub overflow_l: f64,
}

/// Cumulative quantities over a run (litres, full precision).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunTotals {
    pub rainwater_l: f64,
    pub greywater_l: f64,
    pub treated_l: f64,
    pub demand_l: f64,
    pub supplied_l: f64,
    pub deficit_l: f64,
    pub overflow_l: f64,
}

impl RunTotals {
    fn accumulate(mut self, record: &DayRecord, demand_l: f64) -> Self {
        self.rainwater_l += record.rainwater_l;
        self.greywater_l += record.greywater_l;
        self.treated_l += record.treated_l;
        self.demand_l += demand_l;
        self.supplied_l += record.supplied_l;
        self.deficit_l += record.deficit_l;
        self.overflow_l += record.overflow_l;
        self
    }
}

/// Outcome of one run. Owned by the caller; nothing else refers to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub seed: u64,
    pub days: u32,
    /// Full-precision totals
    pub totals: RunTotals,
    /// Metrics rounded to output precision
    pub summary: SummaryMetrics,
    pub daily_log: Vec<DayRecord>,
}

/// Fold accumulator.
struct RunState {
    tank: StorageTank,
    totals: RunTotals,
    log: Vec<DayRecord>,
}

/// Drives a [`SeasonalRainfallModel`] and a [`StorageTank`] over the
/// configured number of days.
#[derive(Debug, Clone)]
pub struct SimulationEngine<'a> {
    config: &'a SimulationConfig,
    profile: MonthlyRainfallProfile,
    verbose: bool,
}

impl<'a> SimulationEngine<'a> {
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self {
            config,
            profile: MonthlyRainfallProfile::default(),
            verbose: false,
        }
    }

    pub fn with_profile(mut self, profile: MonthlyRainfallProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Log a snapshot every 30 days at info level.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the configuration, then simulate every day in order.
    pub fn run(&self, seed: u64) -> SimResult<SimulationResult> {
        let c = self.config;
        c.validate()?;

        debug!(seed, days = c.days, "starting water balance run");

        let mut rainfall = SeasonalRainfallModel::new(self.profile, seed)?;
        let grey_l = greywater_recovered_l(
            c.household_size,
            c.daily_use_l,
            c.greywater_fraction,
            c.greywater_recovery_rate,
        );
        let demand_l = household_demand_l(c.household_size, c.daily_use_l);

        let init = RunState {
            tank: StorageTank::new(c.storage_capacity_l)?,
            totals: RunTotals::default(),
            log: Vec::with_capacity(c.days as usize),
        };

        let state = (1..=c.days).fold(init, |mut state, day| {
            let rainfall_mm = rainfall.rainfall_for_day(day, c.base_rainfall_mm);
            let rain_l = rainwater_harvested_l(rainfall_mm, c.catchment_area_m2, c.runoff_coefficient);
            let treated_l = after_treatment_l(rain_l + grey_l, c.treatment_efficiency);

            let step = state.tank.apply_day(treated_l, demand_l);
            let record = day_record(day, rainfall_mm, rain_l, grey_l, treated_l, &step);
            self.log_day(&record);

            state.totals = state.totals.accumulate(&record, demand_l);
            state.log.push(record);
            state
        });

        let tank = state.tank.state();
        let totals = RunTotals {
            overflow_l: tank.overflow_l,
            deficit_l: tank.deficit_l,
            ..state.totals
        };
        let summary = SummaryMetrics::from_totals(&totals, c.unit_water_cost, c.days).rounded();

        info!(
            days = c.days,
            treated_l = summary.total_treated_l,
            self_sufficiency_pct = summary.self_sufficiency_pct,
            overflow_l = summary.total_overflow_l,
            "water balance run complete"
        );

        Ok(SimulationResult {
            seed,
            days: c.days,
            totals,
            summary,
            daily_log: state.log,
        })
    }

    fn log_day(&self, r: &DayRecord) {
        if self.verbose && r.day % 30 == 0 {
            let month = MONTH_NAMES[((r.day - 1) / 30 % 12) as usize];
            info!(
                day = r.day,
                month,
                rain_l = r.rainwater_l.round(),
                grey_l = r.greywater_l.round(),
                treated_l = r.treated_l.round(),
                storage_l = r.storage_l.round(),
                deficit_l = r.deficit_l.round(),
                "monthly snapshot"
            );
        } else {
            trace!(
                day = r.day,
                rainfall_mm = r.rainfall_mm,
                storage_l = r.storage_l,
                deficit_l = r.deficit_l,
                "day complete"
            );
        }
    }
}

fn day_record(
    day: u32,
    rainfall_mm: f64,
    rainwater_l: f64,
    greywater_l: f64,
    treated_l: f64,
    step: &TankStep,
) -> DayRecord {
    DayRecord {
        day,
        rainfall_mm,
        rainwater_l,
        greywater_l,
        treated_l,
        storage_l: step.storage_after_l,
        supplied_l: step.supplied_l,
        deficit_l: step.deficit_l,
        overflow_l: step.overflow_l,
    }
}

/// Run one simulation with the built-in rainfall profile.
///
/// `verbose` only affects logging.
pub fn run(config: &SimulationConfig, seed: u64, verbose: bool) -> SimResult<SimulationResult> {
    SimulationEngine::new(config).verbose(verbose).run(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    fn short_config(days: u32) -> SimulationConfig {
        SimulationConfig {
            days,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn one_record_per_day_in_order() {
        let result = run(&short_config(45), 42, false).unwrap();
        assert_eq!(result.daily_log.len(), 45);
        for (i, r) in result.daily_log.iter().enumerate() {
            assert_eq!(r.day, i as u32 + 1);
        }
    }

    #[test]
    fn invalid_config_returns_no_result() {
        let cfg = SimulationConfig {
            treatment_efficiency: 1.5,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            run(&cfg, 42, false),
            Err(SimError::InvalidConfig {
                field: "treatment_efficiency",
                ..
            })
        ));
    }

    #[test]
    fn totals_match_day_log() {
        let result = run(&short_config(90), 5, false).unwrap();
        let treated: f64 = result.daily_log.iter().map(|r| r.treated_l).sum();
        let deficit: f64 = result.daily_log.iter().map(|r| r.deficit_l).sum();
        let overflow: f64 = result.daily_log.iter().map(|r| r.overflow_l).sum();
        assert!((treated - result.totals.treated_l).abs() < 1e-6);
        assert!((deficit - result.totals.deficit_l).abs() < 1e-6);
        assert!((overflow - result.totals.overflow_l).abs() < 1e-6);
    }

    #[test]
    fn greywater_constant_across_days() {
        let result = run(&short_config(20), 9, false).unwrap();
        let first = result.daily_log[0].greywater_l;
        assert!(result.daily_log.iter().all(|r| r.greywater_l == first));
    }

    #[test]
    fn verbose_does_not_change_results() {
        let quiet = run(&short_config(120), 11, false).unwrap();
        let loud = run(&short_config(120), 11, true).unwrap();
        assert_eq!(quiet, loud);
    }

    #[test]
    fn custom_profile_is_used() {
        let cfg = short_config(30);
        let dry = MonthlyRainfallProfile::new([0.0; 12]).unwrap();
        let result = SimulationEngine::new(&cfg).with_profile(dry).run(1).unwrap();
        assert!(result.daily_log.iter().all(|r| r.rainwater_l == 0.0));
        assert_eq!(result.totals.rainwater_l, 0.0);
    }
}
