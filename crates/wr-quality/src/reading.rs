//! Sensor reading and its documented input domain.

use serde::{Deserialize, Serialize};
use wr_core::numeric::ensure_in_range;

use crate::{QualityError, QualityResult};

pub const PH_RANGE: (f64, f64) = (0.0, 14.0);
pub const TURBIDITY_RANGE_NTU: (f64, f64) = (0.0, 100.0);
pub const TEMPERATURE_RANGE_C: (f64, f64) = (0.0, 40.0);
pub const TDS_RANGE_MG_L: (f64, f64) = (0.0, 1_000.0);

/// Four water quality measurements taken together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub ph: f64,
    pub turbidity_ntu: f64,
    pub temperature_c: f64,
    pub tds_mg_l: f64,
}

impl SensorReading {
    /// Build a reading, rejecting non-finite or out-of-range values.
    pub fn new(ph: f64, turbidity_ntu: f64, temperature_c: f64, tds_mg_l: f64) -> QualityResult<Self> {
        let reading = Self {
            ph,
            turbidity_ntu,
            temperature_c,
            tds_mg_l,
        };
        reading.validate()?;
        Ok(reading)
    }

    pub fn validate(&self) -> QualityResult<()> {
        check("ph", self.ph, PH_RANGE)?;
        check("turbidity_ntu", self.turbidity_ntu, TURBIDITY_RANGE_NTU)?;
        check("temperature_c", self.temperature_c, TEMPERATURE_RANGE_C)?;
        check("tds_mg_l", self.tds_mg_l, TDS_RANGE_MG_L)?;
        Ok(())
    }

    /// Parse four textual fields, as received from a form or CLI.
    pub fn parse(ph: &str, turbidity: &str, temperature: &str, tds: &str) -> QualityResult<Self> {
        Self::new(
            parse_field("ph", ph)?,
            parse_field("turbidity_ntu", turbidity)?,
            parse_field("temperature_c", temperature)?,
            parse_field("tds_mg_l", tds)?,
        )
    }
}

fn check(field: &'static str, value: f64, (min, max): (f64, f64)) -> QualityResult<()> {
    ensure_in_range(value, min, max, field)
        .map(|_| ())
        .map_err(|e| QualityError::InvalidReading {
            field,
            value,
            reason: e.to_string(),
        })
}

fn parse_field(field: &'static str, raw: &str) -> QualityResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| QualityError::InvalidReading {
            field,
            value: f64::NAN,
            reason: format!("not a number: {raw:?} ({e})"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_reading() {
        let r = SensorReading::new(7.2, 3.0, 25.0, 380.0).unwrap();
        assert_eq!(r.ph, 7.2);
    }

    #[test]
    fn range_edges_are_inclusive() {
        SensorReading::new(0.0, 0.0, 0.0, 0.0).unwrap();
        SensorReading::new(14.0, 100.0, 40.0, 1_000.0).unwrap();
    }

    #[test]
    fn rejects_out_of_range_ph() {
        let err = SensorReading::new(14.5, 3.0, 25.0, 380.0).unwrap_err();
        assert!(matches!(err, QualityError::InvalidReading { field: "ph", .. }));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(SensorReading::new(7.0, f64::NAN, 25.0, 380.0).is_err());
        assert!(SensorReading::new(7.0, 3.0, f64::INFINITY, 380.0).is_err());
    }

    #[test]
    fn rejects_negative_tds() {
        let err = SensorReading::new(7.0, 3.0, 25.0, -1.0).unwrap_err();
        assert!(matches!(
            err,
            QualityError::InvalidReading {
                field: "tds_mg_l",
                ..
            }
        ));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let err = SensorReading::parse("seven", "3", "25", "380").unwrap_err();
        assert!(matches!(err, QualityError::InvalidReading { field: "ph", .. }));
        let ok = SensorReading::parse(" 7.1 ", "3", "25", "380").unwrap();
        assert_eq!(ok.ph, 7.1);
    }
}
