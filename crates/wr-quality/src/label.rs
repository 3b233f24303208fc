use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::QualityError;

/// Fitness of a water sample for reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityLabel {
    #[serde(rename = "Safe for Reuse")]
    SafeForReuse,
    #[serde(rename = "Needs Treatment")]
    NeedsTreatment,
    #[serde(rename = "Unsafe")]
    Unsafe,
}

impl QualityLabel {
    pub const ALL: [QualityLabel; 3] = [
        QualityLabel::SafeForReuse,
        QualityLabel::NeedsTreatment,
        QualityLabel::Unsafe,
    ];

    /// Numeric class code (0, 1, 2).
    pub fn code(self) -> u8 {
        match self {
            QualityLabel::SafeForReuse => 0,
            QualityLabel::NeedsTreatment => 1,
            QualityLabel::Unsafe => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            QualityLabel::SafeForReuse => "Safe for Reuse",
            QualityLabel::NeedsTreatment => "Needs Treatment",
            QualityLabel::Unsafe => "Unsafe",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QualityLabel {
    type Err = QualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QualityError::UnknownLabel(s.to_string()))
    }
}
