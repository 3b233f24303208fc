//! Validated classifier output and the classifier seam.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::label::QualityLabel;
use crate::reading::SensorReading;
use crate::{QualityError, QualityResult};

/// Allowed drift of the probability sum away from 1.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// A label, its confidence and the full class distribution.
///
/// Only constructible through [`Classification::new`] or
/// [`Classification::from_probabilities`], so every instance carries all
/// three labels with probabilities in `[0, 1]` summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClassificationRepr")]
pub struct Classification {
    label: QualityLabel,
    confidence: f64,
    probabilities: BTreeMap<QualityLabel, f64>,
}

impl Classification {
    pub fn new(
        label: QualityLabel,
        confidence: f64,
        probabilities: BTreeMap<QualityLabel, f64>,
    ) -> QualityResult<Self> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(QualityError::InvalidClassification {
                what: format!("confidence {confidence} outside [0, 1]"),
            });
        }
        validate_distribution(&probabilities)?;
        Ok(Self {
            label,
            confidence,
            probabilities,
        })
    }

    /// Pick the most probable label; its probability becomes the confidence.
    pub fn from_probabilities(probabilities: BTreeMap<QualityLabel, f64>) -> QualityResult<Self> {
        validate_distribution(&probabilities)?;
        let (label, confidence) = probabilities
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(l, p)| (*l, *p))
            .ok_or_else(|| QualityError::InvalidClassification {
                what: "empty distribution".to_string(),
            })?;
        Self::new(label, confidence, probabilities)
    }

    pub fn label(&self) -> QualityLabel {
        self.label
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn probability(&self, label: QualityLabel) -> f64 {
        self.probabilities.get(&label).copied().unwrap_or(0.0)
    }

    pub fn probabilities(&self) -> &BTreeMap<QualityLabel, f64> {
        &self.probabilities
    }
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
struct ClassificationRepr {
    label: QualityLabel,
    confidence: f64,
    probabilities: BTreeMap<QualityLabel, f64>,
}

impl TryFrom<ClassificationRepr> for Classification {
    type Error = QualityError;

    fn try_from(raw: ClassificationRepr) -> QualityResult<Self> {
        Self::new(raw.label, raw.confidence, raw.probabilities)
    }
}

fn validate_distribution(probabilities: &BTreeMap<QualityLabel, f64>) -> QualityResult<()> {
    for label in QualityLabel::ALL {
        let p = probabilities
            .get(&label)
            .ok_or_else(|| QualityError::InvalidClassification {
                what: format!("missing probability for '{label}'"),
            })?;
        if !p.is_finite() || !(0.0..=1.0).contains(p) {
            return Err(QualityError::InvalidClassification {
                what: format!("probability {p} for '{label}' outside [0, 1]"),
            });
        }
    }
    let sum: f64 = probabilities.values().sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(QualityError::InvalidClassification {
            what: format!("probabilities sum to {sum}, expected 1"),
        });
    }
    Ok(())
}

/// Anything that can turn a sensor reading into a quality label.
///
/// Implementations must reject invalid readings with
/// [`QualityError::InvalidReading`] rather than guessing a label.
pub trait Classifier {
    fn classify(&self, reading: &SensorReading) -> QualityResult<Classification>;
}
