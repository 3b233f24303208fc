//! Project validation logic.

use crate::schema::{LATEST_VERSION, Project, ScenarioDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut scenario_ids = HashSet::new();
    for scenario in &project.scenarios {
        if !scenario_ids.insert(&scenario.id) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(scenario)?;
    }

    Ok(())
}

pub fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    if scenario.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("scenario '{}' id", scenario.name),
            value: scenario.id.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    let name = &scenario.name;
    validate_non_negative("catchment.area_m2", scenario.catchment.area_m2, name)?;
    validate_fraction(
        "catchment.runoff_coefficient",
        scenario.catchment.runoff_coefficient,
        name,
    )?;
    validate_non_negative(
        "climate.base_rainfall_mm",
        scenario.climate.base_rainfall_mm,
        name,
    )?;
    if let Some(profile) = &scenario.climate.monthly_profile {
        validate_monthly_profile(profile, name)?;
    }
    validate_non_negative("household.daily_use_l", scenario.household.daily_use_l, name)?;
    validate_fraction(
        "household.greywater_fraction",
        scenario.household.greywater_fraction,
        name,
    )?;
    validate_fraction(
        "household.greywater_recovery_rate",
        scenario.household.greywater_recovery_rate,
        name,
    )?;
    validate_fraction("treatment.efficiency", scenario.treatment.efficiency, name)?;
    validate_non_negative("storage.capacity_l", scenario.storage.capacity_l, name)?;
    validate_non_negative(
        "economics.unit_water_cost",
        scenario.economics.unit_water_cost,
        name,
    )?;

    if scenario.days == 0 {
        return Err(ValidationError::InvalidValue {
            field: format!("scenario '{}' days", name),
            value: "0".to_string(),
            reason: "at least one day must be simulated".to_string(),
        });
    }

    Ok(())
}

fn validate_monthly_profile(profile: &[f64], scenario_name: &str) -> Result<(), ValidationError> {
    if profile.len() != 12 {
        return Err(ValidationError::InvalidValue {
            field: format!("scenario '{}' climate.monthly_profile", scenario_name),
            value: format!("{} entries", profile.len()),
            reason: "exactly 12 monthly factors are required".to_string(),
        });
    }
    for (i, factor) in profile.iter().enumerate() {
        if !factor.is_finite() || *factor < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!(
                    "scenario '{}' climate.monthly_profile[{}]",
                    scenario_name, i
                ),
                value: factor.to_string(),
                reason: "must be non-negative and finite".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_non_negative(
    field: &str,
    value: f64,
    scenario_name: &str,
) -> Result<(), ValidationError> {
    wr_core::ensure_non_negative(value, "value")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidValue {
            field: format!("scenario '{}' {}", scenario_name, field),
            value: value.to_string(),
            reason: "must be non-negative and finite".to_string(),
        })
}

fn validate_fraction(field: &str, value: f64, scenario_name: &str) -> Result<(), ValidationError> {
    wr_core::ensure_fraction(value, "value")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidValue {
            field: format!("scenario '{}' {}", scenario_name, field),
            value: value.to_string(),
            reason: "must lie in [0, 1]".to_string(),
        })
}
