//! Deterministic benchmark inputs: same size, same points, every run.

use tardisim_core::constants::{
    HUMIDITY_MAX, HUMIDITY_MIN, RADIATION_MAX, RADIATION_MIN, TEMPERATURE_MAX, TEMPERATURE_MIN,
};
use tardisim_core::EnvironmentSample;

/// Fixed seed shared by every sampling benchmark.
pub const BENCH_SEED: u64 = 0x7a2d_16ad;

/// Sample counts swept by the sampling benchmarks.
pub const SAMPLE_COUNTS: [usize; 3] = [100, 1_000, 10_000];

/// Grid size presets.
#[derive(Debug, Clone, Copy)]
pub enum GridSize {
    /// 5 points per axis, 125 samples.
    Coarse,
    /// 21 points per axis, 9 261 samples.
    Fine,
}

impl GridSize {
    pub fn points_per_axis(&self) -> usize {
        match self {
            Self::Coarse => 5,
            Self::Fine => 21,
        }
    }

    pub fn len(&self) -> usize {
        self.points_per_axis().pow(3)
    }
}

/// Evenly spaced grid over the full input domain, endpoints included.
pub fn parameter_grid(size: GridSize) -> Vec<EnvironmentSample> {
    let n = size.points_per_axis();
    let temperatures = axis(TEMPERATURE_MIN, TEMPERATURE_MAX, n);
    let humidities = axis(HUMIDITY_MIN, HUMIDITY_MAX, n);
    let radiations = axis(RADIATION_MIN, RADIATION_MAX, n);

    let mut grid = Vec::with_capacity(size.len());
    for &t in &temperatures {
        for &h in &humidities {
            for &r in &radiations {
                grid.push(EnvironmentSample::clamped(t, h, r));
            }
        }
    }
    grid
}

fn axis(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![min];
    }
    let step = (max - min) / (n - 1) as f64;
    (0..n).map(|i| min + i as f64 * step).collect()
}
