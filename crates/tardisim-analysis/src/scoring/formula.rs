use serde::Serialize;
use tardisim_core::constants::{
    HUMIDITY_WEIGHT, PROBABILITY_MAX, PROBABILITY_MIN, RADIATION_WEIGHT, TEMPERATURE_WEIGHT,
};

use super::penalty::temperature_penalty;

/// Each weighted term of the score, for debugging and the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub temperature_penalty: f64,
    /// 0.6 × temperature penalty.
    pub temperature_contribution: f64,
    /// 0.2 × humidity / 100.
    pub humidity_contribution: f64,
    /// 0.2 × (1 − radiation / 100).
    pub radiation_contribution: f64,
    /// Weighted sum before scaling and clamping.
    pub raw_score: f64,
    /// Final probability in [0, 100].
    pub probability: f64,
}

/// Compute the score with a full breakdown of each term.
///
/// Terms are summed left to right so the result matches the plain formula
/// bit for bit.
pub fn score_breakdown(temperature: f64, humidity: f64, radiation: f64) -> ScoreBreakdown {
    let penalty = temperature_penalty(temperature);
    let temperature_contribution = TEMPERATURE_WEIGHT * penalty;
    let humidity_contribution = HUMIDITY_WEIGHT * (humidity / 100.0);
    let radiation_contribution = RADIATION_WEIGHT * (1.0 - radiation / 100.0);

    let raw_score = temperature_contribution + humidity_contribution + radiation_contribution;

    ScoreBreakdown {
        temperature_penalty: penalty,
        temperature_contribution,
        humidity_contribution,
        radiation_contribution,
        raw_score,
        probability: to_probability(raw_score),
    }
}

/// Survival probability in [0, 100] without the interpretation notes.
pub fn survival_probability(temperature: f64, humidity: f64, radiation: f64) -> f64 {
    score_breakdown(temperature, humidity, radiation).probability
}

/// Scale to percent and clamp. NaN (only reachable from non-finite input) maps to 0.
fn to_probability(raw_score: f64) -> f64 {
    let scaled = raw_score * 100.0;
    if scaled.is_nan() {
        return PROBABILITY_MIN;
    }
    scaled.clamp(PROBABILITY_MIN, PROBABILITY_MAX)
}
