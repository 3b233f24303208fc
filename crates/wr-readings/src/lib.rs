//! wr-readings: append-only log of classified water quality readings.

pub mod stats;
pub mod store;
pub mod types;

pub use stats::{daily_stats, reading_stats};
pub use store::{JsonlReadingStore, MemoryReadingStore, ReadingStore};
pub use types::*;

pub type ReadingsResult<T> = Result<T, ReadingsError>;

#[derive(thiserror::Error, Debug)]
pub enum ReadingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt reading log at line {line}: {message}")]
    Corrupt { line: usize, message: String },
}
