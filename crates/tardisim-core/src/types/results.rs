use serde::Serialize;

use super::{Parameter, SpreadBucket};

/// Output of one scorer invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Survival probability in [0, 100].
    pub probability: f64,
    pub temperature_note: String,
    pub humidity_note: String,
    pub radiation_note: String,
}

impl ScoreResult {
    /// Interpretation note for a single parameter.
    pub fn note(&self, parameter: Parameter) -> &str {
        match parameter {
            Parameter::Temperature => &self.temperature_note,
            Parameter::Humidity => &self.humidity_note,
            Parameter::Radiation => &self.radiation_note,
        }
    }

    /// Complementary risk share, `100 - probability`.
    pub fn risk(&self) -> f64 {
        100.0 - self.probability
    }
}

/// Reduced statistics of one sampling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    /// Sampled probabilities in draw order.
    pub samples: Vec<f64>,
    pub mean: f64,
    /// Population standard deviation (divides by n).
    pub std_dev: f64,
    pub bucket: SpreadBucket,
    pub bucket_label: String,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// 5th percentile.
    pub p5: f64,
    /// 95th percentile.
    pub p95: f64,
}

impl DistributionSummary {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
