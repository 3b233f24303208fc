//! Immutable simulation input.

use serde::{Deserialize, Serialize};
use wr_core::numeric::{ensure_fraction, ensure_non_negative};

use crate::error::{SimError, SimResult};

/// Parameters of one household installation and one simulated period.
///
/// Constructed once by the caller and passed by reference into
/// [`crate::run`]; nothing in the engine mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Roof/surface catchment area (m²)
    pub catchment_area_m2: f64,
    /// Base daily rainfall before seasonal weighting (mm)
    pub base_rainfall_mm: f64,
    /// Fraction of rainfall captured as runoff
    pub runoff_coefficient: f64,
    /// Number of people in the household
    pub household_size: u32,
    /// Per-person daily water use (L)
    pub daily_use_l: f64,
    /// Fraction of used water that becomes greywater
    pub greywater_fraction: f64,
    /// Fraction of greywater actually recovered
    pub greywater_recovery_rate: f64,
    /// Fraction of raw water surviving treatment losses
    pub treatment_efficiency: f64,
    /// Storage tank capacity (L)
    pub storage_capacity_l: f64,
    /// Municipal water cost per litre
    pub unit_water_cost: f64,
    /// Number of days to simulate
    pub days: u32,
}

impl Default for SimulationConfig {
    /// Reference five-person household in Tirunelveli.
    fn default() -> Self {
        Self {
            catchment_area_m2: 500.0,
            base_rainfall_mm: 80.0,
            runoff_coefficient: 0.85,
            household_size: 5,
            daily_use_l: 135.0,
            greywater_fraction: 0.65,
            greywater_recovery_rate: 0.75,
            treatment_efficiency: 0.92,
            storage_capacity_l: 40_000.0,
            unit_water_cost: 0.09,
            days: 365,
        }
    }
}

impl SimulationConfig {
    /// Check every field against its domain. Fails on the first offender.
    pub fn validate(&self) -> SimResult<()> {
        non_negative(self.catchment_area_m2, "catchment_area_m2")?;
        non_negative(self.base_rainfall_mm, "base_rainfall_mm")?;
        fraction(self.runoff_coefficient, "runoff_coefficient")?;
        non_negative(self.daily_use_l, "daily_use_l")?;
        fraction(self.greywater_fraction, "greywater_fraction")?;
        fraction(self.greywater_recovery_rate, "greywater_recovery_rate")?;
        fraction(self.treatment_efficiency, "treatment_efficiency")?;
        non_negative(self.storage_capacity_l, "storage_capacity_l")?;
        non_negative(self.unit_water_cost, "unit_water_cost")?;
        if self.days < 1 {
            return Err(SimError::InvalidConfig {
                field: "days",
                value: f64::from(self.days),
                reason: "at least one day must be simulated",
            });
        }
        Ok(())
    }

    /// Household demand for one day (L).
    pub fn daily_demand_l(&self) -> f64 {
        crate::balance::household_demand_l(self.household_size, self.daily_use_l)
    }
}

fn non_negative(value: f64, field: &'static str) -> SimResult<()> {
    ensure_non_negative(value, field)
        .map(|_| ())
        .map_err(|_| SimError::InvalidConfig {
            field,
            value,
            reason: "must be finite and non-negative",
        })
}

fn fraction(value: f64, field: &'static str) -> SimResult<()> {
    ensure_fraction(value, field)
        .map(|_| ())
        .map_err(|_| SimError::InvalidConfig {
            field,
            value,
            reason: "must lie in [0, 1]",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        SimulationConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_fraction_above_one() {
        let cfg = SimulationConfig {
            runoff_coefficient: 1.2,
            ..SimulationConfig::default()
        };
        match cfg.validate().unwrap_err() {
            SimError::InvalidConfig { field, .. } => assert_eq!(field, "runoff_coefficient"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_negative_capacity() {
        let cfg = SimulationConfig {
            storage_capacity_l: -1.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SimError::InvalidConfig {
                field: "storage_capacity_l",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_days() {
        let cfg = SimulationConfig {
            days: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SimError::InvalidConfig { field: "days", .. })
        ));
    }

    #[test]
    fn rejects_nan_area() {
        let cfg = SimulationConfig {
            catchment_area_m2: f64::NAN,
            ..SimulationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_capacity_and_zero_household_are_allowed() {
        let cfg = SimulationConfig {
            storage_capacity_l: 0.0,
            household_size: 0,
            ..SimulationConfig::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn daily_demand_is_people_times_use() {
        assert_eq!(SimulationConfig::default().daily_demand_l(), 675.0);
    }
}
