//! Monte-Carlo sampling over the survival scorer.
//!
//! Randomness is always injected so a seeded run is reproducible:
//! same seed ⇒ identical sample sequence, mean, and std_dev.

pub mod summary;

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tardisim_core::config::defaults;
use tardisim_core::constants::{
    HUMIDITY_MAX, HUMIDITY_MIN, RADIATION_MAX, RADIATION_MIN, TEMPERATURE_MAX, TEMPERATURE_MIN,
};
use tardisim_core::{DistributionSummary, EnvironmentSample, SamplingError};

use crate::scoring;

pub use summary::summarize;

/// Sample count used by the simulator when none is configured.
pub const DEFAULT_SAMPLE_COUNT: usize = defaults::DEFAULT_SAMPLE_COUNT;

/// Build the random source for a run: seeded when `seed` is set, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Draw one uniform parameter triple. Draw order is temperature, humidity, radiation.
pub fn draw_sample<R: Rng + ?Sized>(rng: &mut R) -> EnvironmentSample {
    let temperature = rng.random_range(TEMPERATURE_MIN..=TEMPERATURE_MAX);
    let humidity = rng.random_range(HUMIDITY_MIN..=HUMIDITY_MAX);
    let radiation = rng.random_range(RADIATION_MIN..=RADIATION_MAX);
    // Draws are already inside bounds; clamping never changes them.
    EnvironmentSample::clamped(temperature, humidity, radiation)
}

/// Score `n` independent uniform draws and reduce them to a summary.
///
/// `n == 0` is rejected: the mean and std_dev are undefined for no samples.
pub fn sample_distribution<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<DistributionSummary, SamplingError> {
    if n == 0 {
        return Err(SamplingError::EmptySampleCount);
    }

    let started = Instant::now();
    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        let sample = draw_sample(rng);
        samples.push(scoring::survival_probability(
            sample.temperature(),
            sample.humidity(),
            sample.radiation(),
        ));
    }

    let summary = summarize(samples)?;
    tracing::debug!(
        sample_count = n,
        mean = summary.mean,
        std_dev = summary.std_dev,
        sampling_duration_ms = started.elapsed().as_secs_f64() * 1000.0,
        bucket = summary.bucket.label(),
        "distribution sampled"
    );
    Ok(summary)
}
