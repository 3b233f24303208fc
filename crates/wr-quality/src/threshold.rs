//! Rule-based classifier.
//!
//! Encodes the thresholds used to label reference water quality data:
//! - Safe for Reuse: pH 6.5–8.5, turbidity < 10 NTU, 15–30 °C, TDS < 500 mg/L
//! - Needs Treatment: pH 4–10, turbidity < 50 NTU, 5–40 °C, TDS < 800 mg/L
//! - Unsafe: anything else

use std::collections::BTreeMap;

use tracing::debug;

use crate::classification::{Classification, Classifier};
use crate::label::QualityLabel;
use crate::reading::SensorReading;
use crate::QualityResult;

/// Probability assigned to the rule's label by default.
pub const DEFAULT_RULE_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, Copy)]
pub struct ThresholdClassifier {
    confidence: f64,
}

impl Default for ThresholdClassifier {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_RULE_CONFIDENCE,
        }
    }
}

impl ThresholdClassifier {
    /// Label the reading by the threshold rules alone.
    pub fn label_for(reading: &SensorReading) -> QualityLabel {
        let r = reading;
        if (6.5..=8.5).contains(&r.ph)
            && r.turbidity_ntu < 10.0
            && (15.0..=30.0).contains(&r.temperature_c)
            && r.tds_mg_l < 500.0
        {
            QualityLabel::SafeForReuse
        } else if (4.0..=10.0).contains(&r.ph)
            && r.turbidity_ntu < 50.0
            && (5.0..=40.0).contains(&r.temperature_c)
            && r.tds_mg_l < 800.0
        {
            QualityLabel::NeedsTreatment
        } else {
            QualityLabel::Unsafe
        }
    }
}

impl Classifier for ThresholdClassifier {
    fn classify(&self, reading: &SensorReading) -> QualityResult<Classification> {
        reading.validate()?;
        let label = Self::label_for(reading);
        let rest = (1.0 - self.confidence) / 2.0;
        let probabilities: BTreeMap<QualityLabel, f64> = QualityLabel::ALL
            .into_iter()
            .map(|l| (l, if l == label { self.confidence } else { rest }))
            .collect();
        debug!(%label, ph = reading.ph, tds = reading.tds_mg_l, "threshold classification");
        Classification::new(label, self.confidence, probabilities)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_valid_reading_gets_a_valid_distribution(
            ph in 0.0_f64..=14.0,
            turb in 0.0_f64..=100.0,
            temp in 0.0_f64..=40.0,
            tds in 0.0_f64..=1_000.0,
        ) {
            let reading = SensorReading::new(ph, turb, temp, tds).unwrap();
            let c = ThresholdClassifier::default().classify(&reading).unwrap();
            let sum: f64 = c.probabilities().values().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            prop_assert_eq!(c.label(), ThresholdClassifier::label_for(&reading));
        }
    }
}
