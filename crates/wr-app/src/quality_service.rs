//! Water quality workflow: classify, log, summarise, check standards.

use serde::Serialize;
use tracing::debug;
use wr_quality::{Classification, Classifier, ParameterCheck, SensorReading, WaterSample};
use wr_readings::{ReadingRecord, ReadingStats, ReadingStore};

use crate::error::AppResult;

/// Classify a reading and, when a store is given, append it to the log.
pub fn classify_reading(
    classifier: &dyn Classifier,
    reading: &SensorReading,
    store: Option<&mut dyn ReadingStore>,
) -> AppResult<(Classification, Option<ReadingRecord>)> {
    let classification = classifier.classify(reading)?;
    debug!(
        label = %classification.label(),
        confidence = classification.confidence(),
        "reading classified"
    );
    let record = match store {
        Some(store) => Some(store.append(*reading, &classification)?),
        None => None,
    };
    Ok((classification, record))
}

pub fn reading_stats(store: &dyn ReadingStore) -> AppResult<ReadingStats> {
    Ok(store.stats()?)
}

/// IS 10500 compliance of one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub checks: Vec<ParameterCheck>,
    pub passed: usize,
    pub all_pass: bool,
}

pub fn quality_report(sample: &WaterSample) -> QualityReport {
    let checks = wr_quality::check_is10500(sample);
    let passed = checks.iter().filter(|c| c.pass).count();
    QualityReport {
        all_pass: passed == checks.len(),
        passed,
        checks,
    }
}
