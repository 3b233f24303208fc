//! Project loading, saving, validation, and introspection.

use std::path::Path;
use wr_project::schema::{Project, ScenarioDef};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub days: u32,
    pub household_size: u32,
    pub storage_capacity_l: f64,
    pub seed: Option<u64>,
}

/// Load a project file. `.json` is read as JSON, anything else as YAML.
pub fn load_project(path: &Path) -> AppResult<Project> {
    if !path.exists() {
        return Err(AppError::ProjectFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
        });
    }
    let project = wr_project::load_path(path)?;
    validate_project(&project)?;
    Ok(project)
}

/// Save a project, choosing the format by extension like [`load_project`].
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => wr_project::save_json(path, project)?,
        _ => wr_project::save_yaml(path, project)?,
    }
    Ok(())
}

/// Validate project structure.
pub fn validate_project(project: &Project) -> AppResult<()> {
    if project.scenarios.is_empty() {
        return Err(AppError::Validation(
            "Project must have at least one scenario".to_string(),
        ));
    }
    wr_project::validate_project(project).map_err(|e| AppError::Validation(e.to_string()))
}

/// List all scenarios in the project with summaries.
pub fn list_scenarios(project: &Project) -> Vec<ScenarioSummary> {
    project
        .scenarios
        .iter()
        .map(|s| ScenarioSummary {
            id: s.id.clone(),
            name: s.name.clone(),
            days: s.days,
            household_size: s.household.size,
            storage_capacity_l: s.storage.capacity_l,
            seed: s.seed,
        })
        .collect()
}

/// Get a specific scenario by ID.
pub fn get_scenario<'a>(project: &'a Project, scenario_id: &str) -> AppResult<&'a ScenarioDef> {
    project
        .scenarios
        .iter()
        .find(|s| s.id == scenario_id)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario_id.to_string()))
}
