//! Aggregate supply, cost and environmental metrics.
//!
//! Output precision (half away from zero):
//! - litre totals and average daily recovery: 0 decimals
//! - percentages: 1 decimal
//! - cost saved: 2 decimals
//! - CO2 offset: 1 decimal

use serde::{Deserialize, Serialize};
use wr_core::numeric::{ratio_or_zero, round_dp};

use crate::constants::{CO2_KG_PER_KL, KL_PER_LITRE};
use crate::sim::RunTotals;

const LITRE_DP: u32 = 0;
const PCT_DP: u32 = 1;
const COST_DP: u32 = 2;
const CO2_DP: u32 = 1;

/// Summary of a run. Values are full precision until [`Self::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_rainwater_l: f64,
    pub total_greywater_l: f64,
    pub total_treated_l: f64,
    pub total_demand_l: f64,
    pub total_deficit_l: f64,
    pub total_overflow_l: f64,
    /// Treated water as a percentage of demand (0 when there is no demand)
    pub supply_rate_pct: f64,
    /// Supply rate capped at 100
    pub self_sufficiency_pct: f64,
    pub annual_cost_saved: f64,
    pub co2_offset_kg: f64,
    pub avg_daily_recovery_l: f64,
}

impl SummaryMetrics {
    /// Reduce run totals into metrics.
    pub fn from_totals(totals: &RunTotals, unit_water_cost: f64, days: u32) -> Self {
        let supply_rate_pct = 100.0 * ratio_or_zero(totals.treated_l, totals.demand_l);
        Self {
            total_rainwater_l: totals.rainwater_l,
            total_greywater_l: totals.greywater_l,
            total_treated_l: totals.treated_l,
            total_demand_l: totals.demand_l,
            total_deficit_l: totals.deficit_l,
            total_overflow_l: totals.overflow_l,
            supply_rate_pct,
            self_sufficiency_pct: supply_rate_pct.min(100.0),
            annual_cost_saved: totals.treated_l * unit_water_cost,
            co2_offset_kg: totals.treated_l * KL_PER_LITRE * CO2_KG_PER_KL,
            avg_daily_recovery_l: ratio_or_zero(totals.treated_l, f64::from(days)),
        }
    }

    /// Copy rounded to the documented output precision.
    pub fn rounded(&self) -> Self {
        Self {
            total_rainwater_l: round_dp(self.total_rainwater_l, LITRE_DP),
            total_greywater_l: round_dp(self.total_greywater_l, LITRE_DP),
            total_treated_l: round_dp(self.total_treated_l, LITRE_DP),
            total_demand_l: round_dp(self.total_demand_l, LITRE_DP),
            total_deficit_l: round_dp(self.total_deficit_l, LITRE_DP),
            total_overflow_l: round_dp(self.total_overflow_l, LITRE_DP),
            supply_rate_pct: round_dp(self.supply_rate_pct, PCT_DP),
            self_sufficiency_pct: round_dp(self.self_sufficiency_pct, PCT_DP),
            annual_cost_saved: round_dp(self.annual_cost_saved, COST_DP),
            co2_offset_kg: round_dp(self.co2_offset_kg, CO2_DP),
            avg_daily_recovery_l: round_dp(self.avg_daily_recovery_l, LITRE_DP),
        }
    }
}
