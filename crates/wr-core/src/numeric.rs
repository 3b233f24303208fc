use crate::WrError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-12,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WrError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WrError::NonFinite { what, value: v })
    }
}

/// Finite and within `[min, max]` (inclusive).
pub fn ensure_in_range(v: Real, min: Real, max: Real, what: &'static str) -> Result<Real, WrError> {
    let v = ensure_finite(v, what)?;
    if v < min || v > max {
        return Err(WrError::OutOfRange {
            what,
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}

/// Finite and within `[0, 1]`.
pub fn ensure_fraction(v: Real, what: &'static str) -> Result<Real, WrError> {
    ensure_in_range(v, 0.0, 1.0, what)
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, WrError> {
    ensure_in_range(v, 0.0, Real::INFINITY, what)
}

/// `num / den`, or `0.0` when the denominator is zero.
pub fn ratio_or_zero(num: Real, den: Real) -> Real {
    if den == 0.0 { 0.0 } else { num / den }
}

/// Round to a fixed number of decimal places, half away from zero.
///
/// Only meant for values leaving the system (reports, summaries); internal
/// accumulators stay at full precision.
pub fn round_dp(v: Real, decimals: u32) -> Real {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}
