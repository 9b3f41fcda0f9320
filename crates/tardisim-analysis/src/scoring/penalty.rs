use tardisim_core::constants::{
    OPTIMAL_TEMPERATURE, TEMPERATURE_MAX, TEMPERATURE_MIN, TEMPERATURE_PENALTY_SPAN,
};

/// Temperature sub-score: `1 − |t − 25| / 175`.
///
/// Peaks at 1.0 for 25 °C and decays linearly. Outside [-150, 150] the
/// penalty is 0.0. At the -150 edge it is exactly 0.0; at +150 it is 2/7.
pub fn temperature_penalty(temperature: f64) -> f64 {
    if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
        return 0.0;
    }
    1.0 - (temperature - OPTIMAL_TEMPERATURE).abs() / TEMPERATURE_PENALTY_SPAN
}
