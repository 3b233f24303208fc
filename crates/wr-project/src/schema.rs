//! Project schema definitions.

use serde::{Deserialize, Serialize};

/// Newest project file version this crate understands.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

/// One household installation plus the period and seed to simulate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_days")]
    pub days: u32,
    pub catchment: CatchmentDef,
    pub climate: ClimateDef,
    pub household: HouseholdDef,
    pub treatment: TreatmentDef,
    pub storage: StorageDef,
    pub economics: EconomicsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatchmentDef {
    pub area_m2: f64,
    pub runoff_coefficient: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClimateDef {
    pub base_rainfall_mm: f64,
    /// Twelve relative monthly intensities, January first. Built-in profile
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_profile: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HouseholdDef {
    pub size: u32,
    pub daily_use_l: f64,
    pub greywater_fraction: f64,
    pub greywater_recovery_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentDef {
    pub efficiency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageDef {
    pub capacity_l: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconomicsDef {
    pub unit_water_cost: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_days() -> u32 {
    365
}

fn default_currency() -> String {
    "INR".to_string()
}
