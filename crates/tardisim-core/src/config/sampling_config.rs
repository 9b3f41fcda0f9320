//! Monte-Carlo sampling configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of random parameter triples per run. Default: 1000.
    pub samples: Option<usize>,
    /// Seed for a reproducible run. Unset means OS entropy.
    pub seed: Option<u64>,
    /// Number of equal-width histogram bins. Default: 20.
    pub histogram_bins: Option<usize>,
}

impl SamplingConfig {
    pub fn effective_samples(&self) -> usize {
        self.samples.unwrap_or(defaults::DEFAULT_SAMPLE_COUNT)
    }

    pub fn effective_histogram_bins(&self) -> usize {
        self.histogram_bins.unwrap_or(defaults::DEFAULT_HISTOGRAM_BINS)
    }
}
