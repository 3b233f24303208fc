//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while setting up or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    /// A `SimulationConfig` field lies outside its documented domain.
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

