//! Aggregates over stored readings.

use std::collections::BTreeMap;

use wr_core::numeric::{ratio_or_zero, round_dp};
use wr_quality::{QualityLabel, SensorReading};

use crate::types::{DailyStats, ReadingRecord, ReadingStats};

const AVG_DP: u32 = 2;

/// Nominal batch volumes behind the dashboard recovery estimates.
pub const LITRES_RECOVERED_PER_SAFE: f64 = 100.0;
pub const LITRES_TREATED_PER_TREATMENT: f64 = 80.0;
pub const LITRES_REUSED_PER_SAFE: f64 = 85.0;

#[derive(Default)]
struct Sums {
    count: usize,
    ph: f64,
    turbidity: f64,
    temperature: f64,
    tds: f64,
}

impl Sums {
    fn add(&mut self, r: &SensorReading) {
        self.count += 1;
        self.ph += r.ph;
        self.turbidity += r.turbidity_ntu;
        self.temperature += r.temperature_c;
        self.tds += r.tds_mg_l;
    }

    fn avg(&self, sum: f64) -> f64 {
        round_dp(ratio_or_zero(sum, self.count as f64), AVG_DP)
    }
}

/// Label counts, rounded parameter averages and recovery estimates over
/// `records`.
pub fn reading_stats(records: &[ReadingRecord]) -> ReadingStats {
    let mut sums = Sums::default();
    let mut stats = ReadingStats::default();
    for record in records {
        sums.add(&record.reading);
        match record.label {
            QualityLabel::SafeForReuse => stats.safe_count += 1,
            QualityLabel::NeedsTreatment => stats.treatment_count += 1,
            QualityLabel::Unsafe => stats.unsafe_count += 1,
        }
    }
    ReadingStats {
        total: sums.count,
        avg_ph: sums.avg(sums.ph),
        avg_turbidity: sums.avg(sums.turbidity),
        avg_temperature: sums.avg(sums.temperature),
        avg_tds: sums.avg(sums.tds),
        water_recovered_l: stats.safe_count as f64 * LITRES_RECOVERED_PER_SAFE,
        water_treated_l: stats.treatment_count as f64 * LITRES_TREATED_PER_TREATMENT,
        water_reused_l: stats.safe_count as f64 * LITRES_REUSED_PER_SAFE,
        ..stats
    }
}

/// Per-day averages for the `days` most recent calendar days, newest first.
///
/// The day is the `YYYY-MM-DD` prefix of the stored timestamp.
pub fn daily_stats(records: &[ReadingRecord], days: usize) -> Vec<DailyStats> {
    let mut by_day: BTreeMap<&str, Sums> = BTreeMap::new();
    for record in records {
        let date = record.timestamp.get(..10).unwrap_or(record.timestamp.as_str());
        by_day.entry(date).or_default().add(&record.reading);
    }
    by_day
        .into_iter()
        .rev()
        .take(days)
        .map(|(date, sums)| DailyStats {
            date: date.to_string(),
            count: sums.count,
            avg_ph: sums.avg(sums.ph),
            avg_turbidity: sums.avg(sums.turbidity),
            avg_temperature: sums.avg(sums.temperature),
            avg_tds: sums.avg(sums.tds),
        })
        .collect()
}
