//! wr-core: shared foundation for the water reuse workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for millimetres and square metres, litre conversion)
//! - numeric (Real + tolerances + float helpers + output rounding)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WrError, WrResult};
pub use numeric::*;
pub use units::*;
