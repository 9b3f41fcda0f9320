//! Report model: everything one simulation run shows, already computed.

use rand::Rng;
use serde::Serialize;
use tardisim_analysis::{
    histogram, interpret, sample_distribution, score_breakdown, score_sample, Histogram,
    InterpretationSet, ScoreBreakdown,
};
use tardisim_core::config::defaults;
use tardisim_core::{
    DistributionSummary, EnvironmentSample, ReportError, ScoreResult, TardisimConfig,
};

/// Survival versus risk shares for the pie chart. Sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurvivalSplit {
    pub survival: f64,
    pub risk: f64,
}

impl SurvivalSplit {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            survival: probability,
            risk: 100.0 - probability,
        }
    }
}

/// Knobs for building and rendering a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub samples: usize,
    pub histogram_bins: usize,
    /// Width of the longest chart bar, in characters.
    pub chart_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            samples: defaults::DEFAULT_SAMPLE_COUNT,
            histogram_bins: defaults::DEFAULT_HISTOGRAM_BINS,
            chart_width: defaults::DEFAULT_CHART_WIDTH,
        }
    }
}

impl ReportOptions {
    pub fn from_config(config: &TardisimConfig) -> Self {
        Self {
            samples: config.sampling.effective_samples(),
            histogram_bins: config.sampling.effective_histogram_bins(),
            chart_width: config.report.effective_chart_width(),
        }
    }
}

/// One complete simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub inputs: EnvironmentSample,
    pub score: ScoreResult,
    pub breakdown: ScoreBreakdown,
    pub interpretations: InterpretationSet,
    pub survival: SurvivalSplit,
    pub distribution: DistributionSummary,
    pub histogram: Histogram,
}

impl SimulationReport {
    /// Score `inputs` once, sample the distribution once, and bin it.
    pub fn build<R: Rng + ?Sized>(
        inputs: EnvironmentSample,
        options: &ReportOptions,
        rng: &mut R,
    ) -> Result<Self, ReportError> {
        let score = score_sample(&inputs);
        let (t, h, r) = (inputs.temperature(), inputs.humidity(), inputs.radiation());
        let breakdown = score_breakdown(t, h, r);
        let interpretations = interpret(t, h, r);
        let survival = SurvivalSplit::from_probability(score.probability);

        let distribution = sample_distribution(options.samples, rng)?;
        let histogram = histogram(&distribution.samples, options.histogram_bins)?;

        tracing::info!(
            probability = score.probability,
            mean = distribution.mean,
            std_dev = distribution.std_dev,
            "simulation report built"
        );

        Ok(Self {
            inputs,
            score,
            breakdown,
            interpretations,
            survival,
            distribution,
            histogram,
        })
    }
}
