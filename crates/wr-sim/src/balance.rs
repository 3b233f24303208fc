//! Water balance calculators.
//!
//! Pure functions turning rainfall, household use and treatment losses into
//! litre quantities. Inputs are assumed to have passed
//! [`crate::SimulationConfig::validate`].

use wr_core::units::{as_litres, depth_over_area, m2, mm};

/// Litres of rainwater harvested from `rainfall_mm` falling on `area_m2`.
///
/// Computed through SI quantities, so it can differ from the plain
/// `rainfall_mm * area_m2 * runoff_coefficient` product by a few ulps.
pub fn rainwater_harvested_l(rainfall_mm: f64, area_m2: f64, runoff_coefficient: f64) -> f64 {
    as_litres(depth_over_area(mm(rainfall_mm), m2(area_m2))) * runoff_coefficient
}

/// Litres of greywater recovered per day.
pub fn greywater_recovered_l(
    household_size: u32,
    daily_use_l: f64,
    greywater_fraction: f64,
    recovery_rate: f64,
) -> f64 {
    let generated = household_demand_l(household_size, daily_use_l) * greywater_fraction;
    generated * recovery_rate
}

/// Litres remaining after treatment losses (RO brine, evaporation).
pub fn after_treatment_l(raw_l: f64, treatment_efficiency: f64) -> f64 {
    raw_l * treatment_efficiency
}

/// Daily household demand (L).
pub fn household_demand_l(household_size: u32, daily_use_l: f64) -> f64 {
    f64::from(household_size) * daily_use_l
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wr_core::numeric::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn rainwater_is_depth_times_area_times_runoff() {
        assert!(close(rainwater_harvested_l(10.0, 500.0, 0.85), 4_250.0));
        assert_eq!(rainwater_harvested_l(0.0, 500.0, 0.85), 0.0);
        assert_eq!(rainwater_harvested_l(10.0, 500.0, 0.0), 0.0);
    }

    #[test]
    fn greywater_for_reference_household() {
        // 5 * 135 * 0.65 * 0.75
        assert!(close(greywater_recovered_l(5, 135.0, 0.65, 0.75), 329.0625));
    }

    #[test]
    fn greywater_is_zero_without_people() {
        assert_eq!(greywater_recovered_l(0, 135.0, 0.65, 0.75), 0.0);
    }

    #[test]
    fn treatment_scales_by_efficiency() {
        assert!(close(after_treatment_l(1_000.0, 0.92), 920.0));
        assert_eq!(after_treatment_l(1_000.0, 0.0), 0.0);
        assert_eq!(after_treatment_l(1_000.0, 1.0), 1_000.0);
    }

    proptest! {
        #[test]
        fn rainwater_matches_plain_product(
            rainfall in 0.0_f64..500.0,
            area in 0.0_f64..10_000.0,
            runoff in 0.0_f64..=1.0,
        ) {
            let plain = rainfall * area * runoff;
            let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
            let got = rainwater_harvested_l(rainfall, area, runoff);
            prop_assert!(nearly_equal(got, plain, tol), "{} vs {}", got, plain);
        }
    }
}
