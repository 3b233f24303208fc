//! Scenario definition → simulation runtime inputs.

use wr_project::schema::{Project, ScenarioDef};
use wr_sim::constants::DEFAULT_SEED;
use wr_sim::{MonthlyRainfallProfile, SimulationConfig};

use crate::error::{AppError, AppResult};

/// Everything the engine needs to run one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledScenario {
    pub id: String,
    pub name: String,
    pub config: SimulationConfig,
    pub profile: MonthlyRainfallProfile,
    pub seed: u64,
    pub currency: String,
}

pub fn compile_scenario(def: &ScenarioDef) -> AppResult<CompiledScenario> {
    let config = SimulationConfig {
        catchment_area_m2: def.catchment.area_m2,
        base_rainfall_mm: def.climate.base_rainfall_mm,
        runoff_coefficient: def.catchment.runoff_coefficient,
        household_size: def.household.size,
        daily_use_l: def.household.daily_use_l,
        greywater_fraction: def.household.greywater_fraction,
        greywater_recovery_rate: def.household.greywater_recovery_rate,
        treatment_efficiency: def.treatment.efficiency,
        storage_capacity_l: def.storage.capacity_l,
        unit_water_cost: def.economics.unit_water_cost,
        days: def.days,
    };
    config
        .validate()
        .map_err(|e| AppError::Compile(format!("scenario '{}': {}", def.id, e)))?;

    let profile = match &def.climate.monthly_profile {
        None => MonthlyRainfallProfile::default(),
        Some(values) => {
            let factors: [f64; 12] = values.as_slice().try_into().map_err(|_| {
                AppError::Compile(format!(
                    "scenario '{}': monthly_profile needs 12 entries, got {}",
                    def.id,
                    values.len()
                ))
            })?;
            MonthlyRainfallProfile::new(factors)
                .map_err(|e| AppError::Compile(format!("scenario '{}': {}", def.id, e)))?
        }
    };

    Ok(CompiledScenario {
        id: def.id.clone(),
        name: def.name.clone(),
        config,
        profile,
        seed: def.seed.unwrap_or(DEFAULT_SEED),
        currency: def.economics.currency.clone(),
    })
}

/// Compile every scenario in file order.
pub fn compile_project(project: &Project) -> AppResult<Vec<CompiledScenario>> {
    project.scenarios.iter().map(compile_scenario).collect()
}
