//! # tardisim-bench
//!
//! Benchmarks for the simulator.
//! - **Micro**: criterion benches of the scorer and histogram
//! - **Component**: a full sampling run
//! - **Regression**: timed runs compared against a stored baseline
//!
//! Shared deterministic fixtures live in [`fixtures`]; the baseline-compared
//! suite behind `cargo bench --bench regression` lives in [`regression`].

use std::time::Instant;

pub mod fixtures;
pub mod regression;

/// Benchmark level: determines scope and how strict regression checks are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchLevel {
    /// Function-level microbenchmarks (criterion).
    Micro,
    /// One full sampling or report run.
    Component,
    /// Baseline-compared runs that fail on regression.
    Regression,
}

impl BenchLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Component => "component",
            Self::Regression => "regression",
        }
    }

    /// Whether a regression at this level should fail the run.
    pub fn blocks_ci(&self) -> bool {
        matches!(self, Self::Regression)
    }

    /// Allowed slowdown relative to baseline, as a fraction.
    pub fn regression_threshold(&self) -> f64 {
        match self {
            Self::Micro => 0.20,
            Self::Component => 0.50,
            Self::Regression => 0.10,
        }
    }
}

/// Timing of one benchmark, serializable for baseline files.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchResult {
    pub name: String,
    pub level: BenchLevel,
    pub duration_ms: f64,
    pub iterations: u64,
    /// Iterations per second.
    pub throughput: Option<f64>,
}

impl BenchResult {
    /// Check if this result regresses vs a baseline.
    pub fn regresses_vs(&self, baseline: &BenchResult) -> bool {
        if baseline.duration_ms <= 0.0 {
            return false;
        }
        let ratio = self.duration_ms / baseline.duration_ms;
        ratio > (1.0 + self.level.regression_threshold())
    }

    /// Mean time per iteration in milliseconds.
    pub fn per_iteration_ms(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.duration_ms / self.iterations as f64
    }
}

/// Run `f` `iterations` times and record the wall-clock total.
pub fn measure<F: FnMut()>(
    name: &str,
    level: BenchLevel,
    iterations: u64,
    mut f: F,
) -> BenchResult {
    let started = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = started.elapsed().as_secs_f64();

    BenchResult {
        name: name.to_string(),
        level,
        duration_ms: elapsed * 1000.0,
        iterations,
        throughput: (elapsed > 0.0).then(|| iterations as f64 / elapsed),
    }
}
