//! Fixed model constants.
//!
//! Weights and thresholds are design constants, not configuration.

// --- Parameter bounds ---
pub const TEMPERATURE_MIN: f64 = -150.0;
pub const TEMPERATURE_MAX: f64 = 150.0;
pub const HUMIDITY_MIN: f64 = 0.0;
pub const HUMIDITY_MAX: f64 = 100.0;
pub const RADIATION_MIN: f64 = 0.0;
pub const RADIATION_MAX: f64 = 100.0;

// --- Temperature penalty ---
/// Temperature (°C) at which the penalty peaks at 1.0.
pub const OPTIMAL_TEMPERATURE: f64 = 25.0;
/// Distance from the optimum over which the penalty decays linearly to 0.
pub const TEMPERATURE_PENALTY_SPAN: f64 = 175.0;

// --- Score weights (sum to 1.0) ---
pub const TEMPERATURE_WEIGHT: f64 = 0.6;
pub const HUMIDITY_WEIGHT: f64 = 0.2;
pub const RADIATION_WEIGHT: f64 = 0.2;

// --- Probability range ---
pub const PROBABILITY_MIN: f64 = 0.0;
pub const PROBABILITY_MAX: f64 = 100.0;

// --- Interpretation ladders (low bound inclusive, high bound inclusive) ---
pub const TEMPERATURE_LOW_THRESHOLD: f64 = 20.0;
pub const TEMPERATURE_HIGH_THRESHOLD: f64 = 50.0;
pub const HUMIDITY_LOW_THRESHOLD: f64 = 30.0;
pub const HUMIDITY_HIGH_THRESHOLD: f64 = 70.0;
pub const RADIATION_LOW_THRESHOLD: f64 = 30.0;
pub const RADIATION_HIGH_THRESHOLD: f64 = 70.0;

// --- Distribution spread buckets ---
/// std_dev strictly below this is "concentrated/stable".
pub const SPREAD_CONCENTRATED_BELOW: f64 = 10.0;
/// std_dev strictly below this (and at least the previous) is "moderate".
pub const SPREAD_MODERATE_BELOW: f64 = 30.0;
