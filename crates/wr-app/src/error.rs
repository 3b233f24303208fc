//! Error types for the wr-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives the CLI a single error surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Scenario compilation failed: {0}")]
    Compile(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Water quality error: {0}")]
    Quality(String),

    #[error("Reading store error: {0}")]
    Readings(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wr-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<wr_project::ProjectError> for AppError {
    fn from(err: wr_project::ProjectError) -> Self {
        match err {
            wr_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<wr_sim::SimError> for AppError {
    fn from(err: wr_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<wr_quality::QualityError> for AppError {
    fn from(err: wr_quality::QualityError) -> Self {
        AppError::Quality(err.to_string())
    }
}

impl From<wr_readings::ReadingsError> for AppError {
    fn from(err: wr_readings::ReadingsError) -> Self {
        AppError::Readings(err.to_string())
    }
}
