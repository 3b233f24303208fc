//! wr-quality: water quality classification contract and standards checks.
//!
//! Contains:
//! - reading (four-parameter sensor reading + documented input ranges)
//! - label (three-class quality taxonomy)
//! - classification (validated classifier output + `Classifier` trait)
//! - threshold (rule-based classifier)
//! - standards (IS 10500 drinking water parameter limits)

pub mod classification;
pub mod label;
pub mod reading;
pub mod standards;
pub mod threshold;

pub use classification::{Classification, Classifier};
pub use label::QualityLabel;
pub use reading::SensorReading;
pub use standards::{Limit, Parameter, ParameterCheck, WaterSample, check_is10500};
pub use threshold::ThresholdClassifier;

pub type QualityResult<T> = Result<T, QualityError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum QualityError {
    /// Sensor input rejected before classification.
    #[error("Invalid reading: {field} = {value} ({reason})")]
    InvalidReading {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("Invalid classification: {what}")]
    InvalidClassification { what: String },

    #[error("Unknown label: {0}")]
    UnknownLabel(String),
}
