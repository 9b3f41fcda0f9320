//! Weighted survival scoring.
//!
//! ```text
//! score = 0.6 × temperaturePenalty
//!       + 0.2 × humidity / 100
//!       + 0.2 × (1 − radiation / 100)
//!
//! probability = clamp(score × 100, 0, 100)
//! ```

pub mod formula;
pub mod penalty;

use tardisim_core::{EnvironmentSample, ScoreResult};

use crate::interpretation;

pub use formula::{score_breakdown, survival_probability, ScoreBreakdown};
pub use penalty::temperature_penalty;

/// Score one parameter triple: probability plus the three interpretation notes.
///
/// Total over all finite inputs; out-of-range temperatures contribute a zero
/// penalty instead of failing.
pub fn score(temperature: f64, humidity: f64, radiation: f64) -> ScoreResult {
    let probability = survival_probability(temperature, humidity, radiation);
    let notes = interpretation::interpret(temperature, humidity, radiation);
    tracing::trace!(temperature, humidity, radiation, probability, "scored");

    ScoreResult {
        probability,
        temperature_note: notes.temperature.note.to_string(),
        humidity_note: notes.humidity.note.to_string(),
        radiation_note: notes.radiation.note.to_string(),
    }
}

/// [`score`] for an already-validated sample.
pub fn score_sample(sample: &EnvironmentSample) -> ScoreResult {
    score(sample.temperature(), sample.humidity(), sample.radiation())
}
