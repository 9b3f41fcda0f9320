//! Timed regression suite compared against a stored JSON baseline.
//!
//! The first run records the baseline; later runs fail when a
//! [`BenchLevel::Regression`] benchmark slows down past its threshold.
//! Delete the baseline file to re-record it.

use std::hint::black_box;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tardisim_analysis::{histogram, sample_distribution, score_sample, seeded_rng};
use tardisim_core::SamplingError;

use crate::fixtures::{parameter_grid, GridSize, BENCH_SEED};
use crate::{measure, BenchLevel, BenchResult};

/// Environment variable overriding the baseline location.
pub const BASELINE_ENV_VAR: &str = "TARDISIM_BENCH_BASELINE";

/// Baseline location relative to the bench crate when the variable is unset.
pub const DEFAULT_BASELINE_PATH: &str = "target/tardisim-bench-baseline.json";

#[derive(Debug, thiserror::Error)]
pub enum BaselineError {
    #[error("cannot access benchmark baseline {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("benchmark baseline {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Stored timings of a previous suite run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Baseline {
    pub results: Vec<BenchResult>,
}

impl Baseline {
    /// Read a baseline. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, BaselineError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| BaselineError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let baseline = serde_json::from_str(&content).map_err(|source| BaselineError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Some(baseline))
    }

    /// Write the baseline, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), BaselineError> {
        let io_err = |source| BaselineError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| BaselineError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        std::fs::write(path, json).map_err(io_err)
    }

    pub fn get(&self, name: &str) -> Option<&BenchResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

/// A benchmark that slowed down past its level's threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Regression {
    pub name: String,
    pub level: BenchLevel,
    pub baseline_ms: f64,
    pub current_ms: f64,
}

impl Regression {
    /// Slowdown as a fraction: 0.25 means 25% slower.
    pub fn slowdown(&self) -> f64 {
        self.current_ms / self.baseline_ms - 1.0
    }
}

/// Regressions of `current` against `baseline`.
///
/// Benchmarks absent from the baseline are new, not regressions.
pub fn compare(current: &[BenchResult], baseline: &Baseline) -> Vec<Regression> {
    current
        .iter()
        .filter_map(|result| {
            let base = baseline.get(&result.name)?;
            result.regresses_vs(base).then(|| Regression {
                name: result.name.clone(),
                level: result.level,
                baseline_ms: base.duration_ms,
                current_ms: result.duration_ms,
            })
        })
        .collect()
}

/// Time the fixed workload: the scorer over the fine grid, two sampling
/// runs, and histogram binning of a 10 000-sample run.
pub fn run_suite(iterations: u64) -> Result<Vec<BenchResult>, SamplingError> {
    let grid = parameter_grid(GridSize::Fine);
    let samples = sample_distribution(10_000, &mut seeded_rng(Some(BENCH_SEED)))?.samples;

    let sampling = |n: usize| {
        move || {
            let mut rng = seeded_rng(Some(BENCH_SEED));
            let _ = black_box(sample_distribution(n, &mut rng));
        }
    };

    Ok(vec![
        measure("score_grid", BenchLevel::Micro, iterations, || {
            for sample in &grid {
                let _ = black_box(score_sample(black_box(sample)));
            }
        }),
        measure("histogram_20_bins", BenchLevel::Micro, iterations, || {
            let _ = black_box(histogram(black_box(&samples), 20));
        }),
        measure(
            "sample_distribution_1000",
            BenchLevel::Component,
            iterations,
            sampling(1_000),
        ),
        measure(
            "sample_distribution_10000",
            BenchLevel::Regression,
            iterations,
            sampling(10_000),
        ),
    ])
}
