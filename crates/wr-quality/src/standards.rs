//! IS 10500 drinking water limits for treated output.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    Ph,
    Tds,
    Turbidity,
    Hardness,
    Chloride,
    Nitrate,
    Coliform,
    DissolvedOxygen,
}

impl Parameter {
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Tds => "TDS (ppm)",
            Parameter::Turbidity => "Turbidity (NTU)",
            Parameter::Hardness => "Hardness (mg/L)",
            Parameter::Chloride => "Chloride (mg/L)",
            Parameter::Nitrate => "Nitrate (mg/L)",
            Parameter::Coliform => "Coliform (MPN)",
            Parameter::DissolvedOxygen => "DO (mg/L)",
        }
    }

    /// Acceptable range for this parameter.
    pub fn limit(self) -> Limit {
        match self {
            Parameter::Ph => Limit::range(6.8, 8.5),
            Parameter::Tds => Limit::max(500.0),
            Parameter::Turbidity => Limit::max(1.0),
            Parameter::Hardness => Limit::max(300.0),
            Parameter::Chloride => Limit::max(250.0),
            Parameter::Nitrate => Limit::max(45.0),
            Parameter::Coliform => Limit::max(0.0),
            Parameter::DissolvedOxygen => Limit::range(5.0, 8.0),
        }
    }
}

/// Inclusive acceptance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub min: f64,
    pub max: f64,
}

impl Limit {
    pub const fn range(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn max(max: f64) -> Self {
        Self { min: 0.0, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == 0.0 {
            write!(f, "{}", self.max)
        } else {
            write!(f, "{}–{}", self.min, self.max)
        }
    }
}

/// Laboratory analysis of one treated water sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterSample {
    pub ph: f64,
    pub tds_ppm: f64,
    pub turbidity_ntu: f64,
    pub hardness_mg_l: f64,
    pub chloride_mg_l: f64,
    pub nitrate_mg_l: f64,
    pub coliform_mpn: f64,
    pub dissolved_oxygen_mg_l: f64,
}

impl WaterSample {
    /// Typical analysis after RO + UV treatment.
    pub const TREATED_REFERENCE: Self = Self {
        ph: 7.2,
        tds_ppm: 382.0,
        turbidity_ntu: 0.31,
        hardness_mg_l: 145.0,
        chloride_mg_l: 88.0,
        nitrate_mg_l: 12.4,
        coliform_mpn: 0.0,
        dissolved_oxygen_mg_l: 6.8,
    };

    fn values(&self) -> [(Parameter, f64); 8] {
        [
            (Parameter::Ph, self.ph),
            (Parameter::Tds, self.tds_ppm),
            (Parameter::Turbidity, self.turbidity_ntu),
            (Parameter::Hardness, self.hardness_mg_l),
            (Parameter::Chloride, self.chloride_mg_l),
            (Parameter::Nitrate, self.nitrate_mg_l),
            (Parameter::Coliform, self.coliform_mpn),
            (Parameter::DissolvedOxygen, self.dissolved_oxygen_mg_l),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterCheck {
    pub parameter: Parameter,
    pub limit: Limit,
    pub value: f64,
    pub pass: bool,
}

/// Check every parameter of `sample` against its limit.
pub fn check_is10500(sample: &WaterSample) -> Vec<ParameterCheck> {
    sample
        .values()
        .into_iter()
        .map(|(parameter, value)| {
            let limit = parameter.limit();
            ParameterCheck {
                parameter,
                limit,
                value,
                pass: limit.contains(value),
            }
        })
        .collect()
}
