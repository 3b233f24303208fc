//! Reading log data types.

use serde::{Deserialize, Serialize};
use wr_quality::{QualityLabel, SensorReading};

pub type ReadingId = u64;

/// One classified reading as stored. Ids follow insertion order from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub id: ReadingId,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub reading: SensorReading,
    pub label: QualityLabel,
    pub confidence: f64,
}

impl ReadingRecord {
    /// Reject records whose reading or confidence could not have come out
    /// of the classifier.
    pub fn check(&self) -> Result<(), String> {
        self.reading.validate().map_err(|e| e.to_string())?;
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "confidence {} is outside [0, 1]",
                self.confidence
            ));
        }
        Ok(())
    }
}

/// Aggregate view over all stored readings. Averages are 0 when empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadingStats {
    pub total: usize,
    pub safe_count: usize,
    pub treatment_count: usize,
    pub unsafe_count: usize,
    pub avg_ph: f64,
    pub avg_turbidity: f64,
    pub avg_temperature: f64,
    pub avg_tds: f64,
    /// Estimated litres recovered: 100 L per safe reading.
    pub water_recovered_l: f64,
    /// Estimated litres sent for treatment: 80 L per needs-treatment reading.
    pub water_treated_l: f64,
    /// Estimated litres reused: 85 L per safe reading.
    pub water_reused_l: f64,
}

impl ReadingStats {
    pub fn count_for(&self, label: QualityLabel) -> usize {
        match label {
            QualityLabel::SafeForReuse => self.safe_count,
            QualityLabel::NeedsTreatment => self.treatment_count,
            QualityLabel::Unsafe => self.unsafe_count,
        }
    }
}

/// Per-calendar-day averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// `YYYY-MM-DD`
    pub date: String,
    pub count: usize,
    pub avg_ph: f64,
    pub avg_turbidity: f64,
    pub avg_temperature: f64,
    pub avg_tds: f64,
}
