//! Fixed model constants.

/// Divisor applied to the monthly intensity factor so a mid-intensity month
/// yields a multiplier near 1.
pub const SEASONAL_NORMALIZATION: f64 = 5.0;

/// Mean of the multiplicative daily rainfall noise.
pub const RAINFALL_NOISE_MEAN: f64 = 1.0;

/// Standard deviation of the multiplicative daily rainfall noise.
pub const RAINFALL_NOISE_STD: f64 = 0.15;

/// Days per model month. Day-of-year values past 360 fall into month 12.
pub const DAYS_PER_MONTH: u32 = 30;

/// Fill fraction of the storage tank at the start of a run.
pub const INITIAL_FILL_FRACTION: f64 = 0.30;

/// kg of CO2 avoided per kilolitre of municipal pumping displaced.
pub const CO2_KG_PER_KL: f64 = 0.5;

/// Litres to kilolitres.
pub const KL_PER_LITRE: f64 = 0.001;

/// Default seed used when a caller has no preference.
pub const DEFAULT_SEED: u64 = 42;
