//! Bounded storage tank with overflow and deficit accounting.

use serde::{Deserialize, Serialize};

use crate::constants::INITIAL_FILL_FRACTION;
use crate::error::{SimError, SimResult};

/// Mutable tank state for one run (all litres).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TankState {
    pub stored_l: f64,
    pub overflow_l: f64,
    pub deficit_l: f64,
}

/// Outcome of one day of tank operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankStep {
    pub storage_before_l: f64,
    pub inflow_l: f64,
    /// Spilled today because the tank was full
    pub overflow_l: f64,
    pub supplied_l: f64,
    pub deficit_l: f64,
    pub storage_after_l: f64,
}

/// A tank that spills when full and runs short when empty.
///
/// `0 <= stored <= capacity` holds after every operation.
#[derive(Debug, Clone)]
pub struct StorageTank {
    capacity_l: f64,
    state: TankState,
}

impl StorageTank {
    /// New tank starting 30% full.
    pub fn new(capacity_l: f64) -> SimResult<Self> {
        Self::with_initial_fill(capacity_l, INITIAL_FILL_FRACTION)
    }

    pub fn with_initial_fill(capacity_l: f64, fill_fraction: f64) -> SimResult<Self> {
        if !capacity_l.is_finite() || capacity_l < 0.0 {
            return Err(SimError::InvalidArg {
                what: "tank capacity must be finite and non-negative",
            });
        }
        if !(0.0..=1.0).contains(&fill_fraction) {
            return Err(SimError::InvalidArg {
                what: "initial fill fraction must lie in [0, 1]",
            });
        }
        Ok(Self {
            capacity_l,
            state: TankState {
                stored_l: capacity_l * fill_fraction,
                ..TankState::default()
            },
        })
    }

    pub fn capacity_l(&self) -> f64 {
        self.capacity_l
    }

    pub fn state(&self) -> &TankState {
        &self.state
    }

    /// Add today's inflow, spill any excess, then serve `demand_l`.
    pub fn apply_day(&mut self, inflow_l: f64, demand_l: f64) -> TankStep {
        let storage_before_l = self.state.stored_l;
        let mut storage = storage_before_l + inflow_l;

        let mut overflow_l = 0.0;
        if storage > self.capacity_l {
            overflow_l = storage - self.capacity_l;
            self.state.overflow_l += overflow_l;
            storage = self.capacity_l;
        }

        let supplied_l = storage.min(demand_l);
        let deficit_l = (demand_l - supplied_l).max(0.0);
        self.state.deficit_l += deficit_l;

        storage -= supplied_l;
        self.state.stored_l = storage;

        TankStep {
            storage_before_l,
            inflow_l,
            overflow_l,
            supplied_l,
            deficit_l,
            storage_after_l: storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_thirty_percent_full() {
        let tank = StorageTank::new(40_000.0).unwrap();
        assert!((tank.state().stored_l - 12_000.0).abs() < 1e-9);
        assert_eq!(tank.state().overflow_l, 0.0);
        assert_eq!(tank.state().deficit_l, 0.0);
    }

    #[test]
    fn rejects_negative_capacity() {
        assert!(StorageTank::new(-5.0).is_err());
        assert!(StorageTank::new(f64::NAN).is_err());
    }

    #[test]
    fn spills_excess_inflow() {
        let mut tank = StorageTank::with_initial_fill(100.0, 0.5).unwrap();
        let step = tank.apply_day(200.0, 10.0);
        assert_eq!(step.overflow_l, 150.0);
        assert_eq!(step.supplied_l, 10.0);
        assert_eq!(step.deficit_l, 0.0);
        assert_eq!(step.storage_after_l, 90.0);
        assert_eq!(tank.state().overflow_l, 150.0);
    }

    #[test]
    fn records_deficit_when_short() {
        let mut tank = StorageTank::with_initial_fill(1_000.0, 0.0).unwrap();
        let step = tank.apply_day(300.0, 675.0);
        assert_eq!(step.supplied_l, 300.0);
        assert_eq!(step.deficit_l, 375.0);
        assert_eq!(step.storage_after_l, 0.0);
        assert_eq!(tank.state().deficit_l, 375.0);
    }

    #[test]
    fn deficit_accumulates_across_days() {
        let mut tank = StorageTank::with_initial_fill(1_000.0, 0.0).unwrap();
        tank.apply_day(0.0, 100.0);
        tank.apply_day(50.0, 100.0);
        assert_eq!(tank.state().deficit_l, 150.0);
    }

    #[test]
    fn zero_capacity_tank_spills_everything() {
        let mut tank = StorageTank::new(0.0).unwrap();
        let step = tank.apply_day(500.0, 100.0);
        assert_eq!(step.overflow_l, 500.0);
        assert_eq!(step.supplied_l, 0.0);
        assert_eq!(step.deficit_l, 100.0);
        assert_eq!(step.storage_after_l, 0.0);
    }

    #[test]
    fn zero_demand_only_fills() {
        let mut tank = StorageTank::with_initial_fill(1_000.0, 0.0).unwrap();
        let step = tank.apply_day(400.0, 0.0);
        assert_eq!(step.supplied_l, 0.0);
        assert_eq!(step.deficit_l, 0.0);
        assert_eq!(step.storage_after_l, 400.0);
    }
}
