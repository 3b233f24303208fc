//! Query helpers over a finished run's day log.

use serde::Serialize;
use wr_sim::DayRecord;
use wr_sim::constants::DAYS_PER_MONTH;

use crate::error::{AppError, AppResult};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// End-use split of treated water. Fractions sum to 1.
pub const REUSE_SPLIT: [(&str, f64); 5] = [
    ("Irrigation", 0.38),
    ("Toilet Flushing", 0.22),
    ("Drinking/Cooking", 0.18),
    ("Industrial", 0.12),
    ("Laundry", 0.10),
];

/// Variables accepted by [`extract_day_series`].
pub const DAY_SERIES_VARIABLES: [&str; 8] = [
    "rainfall_mm",
    "rainwater_l",
    "greywater_l",
    "treated_l",
    "storage_l",
    "deficit_l",
    "supplied_l",
    "overflow_l",
];

/// Volumes for one 30-day model month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBreakdown {
    /// 1..=12
    pub month: u32,
    pub name: &'static str,
    pub days: usize,
    pub rainwater_l: f64,
    pub greywater_l: f64,
    pub treated_l: f64,
    pub cost_saved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReuseShare {
    pub end_use: &'static str,
    pub fraction: f64,
    pub volume_l: f64,
}

/// Group the day log into twelve 30-day months.
///
/// Month `m` (0-based) covers `m*30 < day <= (m+1)*30`. Days past 360 fall
/// outside every month; months without days are omitted.
pub fn monthly_breakdown(log: &[DayRecord], unit_water_cost: f64) -> Vec<MonthlyBreakdown> {
    (0..12u32)
        .filter_map(|m| {
            let lo = m * DAYS_PER_MONTH;
            let hi = lo + DAYS_PER_MONTH;
            let days: Vec<&DayRecord> =
                log.iter().filter(|r| r.day > lo && r.day <= hi).collect();
            if days.is_empty() {
                return None;
            }
            let treated_l: f64 = days.iter().map(|r| r.treated_l).sum();
            Some(MonthlyBreakdown {
                month: m + 1,
                name: MONTH_NAMES[m as usize],
                days: days.len(),
                rainwater_l: days.iter().map(|r| r.rainwater_l).sum(),
                greywater_l: days.iter().map(|r| r.greywater_l).sum(),
                treated_l,
                cost_saved: treated_l * unit_water_cost,
            })
        })
        .collect()
}

/// Split total treated water across end uses.
pub fn reuse_breakdown(total_treated_l: f64) -> Vec<ReuseShare> {
    REUSE_SPLIT
        .iter()
        .map(|&(end_use, fraction)| ReuseShare {
            end_use,
            fraction,
            volume_l: total_treated_l * fraction,
        })
        .collect()
}

/// Extract `(day, value)` pairs for a day-log variable.
pub fn extract_day_series(log: &[DayRecord], variable: &str) -> AppResult<Vec<(u32, f64)>> {
    let pick: fn(&DayRecord) -> f64 = match variable {
        "rainfall_mm" => |r: &DayRecord| r.rainfall_mm,
        "rainwater_l" | "rainwater" => |r: &DayRecord| r.rainwater_l,
        "greywater_l" | "greywater" => |r: &DayRecord| r.greywater_l,
        "treated_l" | "treated" => |r: &DayRecord| r.treated_l,
        "storage_l" | "storage" => |r: &DayRecord| r.storage_l,
        "deficit_l" | "deficit" => |r: &DayRecord| r.deficit_l,
        "supplied_l" | "supplied" => |r: &DayRecord| r.supplied_l,
        "overflow_l" | "overflow" => |r: &DayRecord| r.overflow_l,
        _ => {
            return Err(AppError::InvalidInput(format!(
                "Unknown day-log variable: {} (expected one of {})",
                variable,
                DAY_SERIES_VARIABLES.join(", ")
            )));
        }
    };
    Ok(log.iter().map(|r| (r.day, pick(r))).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(day: u32, treated: f64) -> DayRecord {
        DayRecord {
            day,
            rainfall_mm: 1.0,
            rainwater_l: treated / 2.0,
            greywater_l: 100.0,
            treated_l: treated,
            storage_l: 0.0,
            supplied_l: 0.0,
            deficit_l: 0.0,
            overflow_l: 0.0,
        }
    }

    #[test]
    fn reuse_split_sums_to_one() {
        let total: f64 = REUSE_SPLIT.iter().map(|(_, f)| f).sum();
        assert!((total - 1.0).abs() < 1e-12);
        let shares = reuse_breakdown(1_000.0);
        assert_eq!(shares[0].end_use, "Irrigation");
        assert!((shares[0].volume_l - 380.0).abs() < 1e-9);
        assert!((shares[4].volume_l - 100.0).abs() < 1e-9);
    }

    #[test]
    fn month_boundaries() {
        let log: Vec<DayRecord> = (1..=61).map(|d| day(d, 10.0)).collect();
        let months = monthly_breakdown(&log, 0.1);
        assert_eq!(months.len(), 3);
        assert_eq!(months[0].days, 30);
        assert_eq!(months[1].days, 30);
        assert_eq!(months[2].days, 1);
        assert_eq!(months[2].name, "Mar");
        assert!((months[0].treated_l - 300.0).abs() < 1e-9);
        assert!((months[0].cost_saved - 30.0).abs() < 1e-9);
    }

    #[test]
    fn days_past_360_are_unassigned() {
        let log: Vec<DayRecord> = (1..=365).map(|d| day(d, 1.0)).collect();
        let months = monthly_breakdown(&log, 1.0);
        assert_eq!(months.len(), 12);
        let assigned: usize = months.iter().map(|m| m.days).sum();
        assert_eq!(assigned, 360);
    }

    #[test]
    fn series_by_name_and_alias() {
        let log = vec![day(1, 5.0), day(2, 7.0)];
        assert_eq!(
            extract_day_series(&log, "treated_l").unwrap(),
            vec![(1, 5.0), (2, 7.0)]
        );
        assert_eq!(
            extract_day_series(&log, "greywater").unwrap(),
            vec![(1, 100.0), (2, 100.0)]
        );
    }

    #[test]
    fn unknown_series_variable_is_rejected() {
        let log = vec![day(1, 5.0)];
        assert!(matches!(
            extract_day_series(&log, "pressure"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
