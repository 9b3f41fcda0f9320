//! # tardisim-analysis
//!
//! The computational core of the simulator:
//! - **Scoring**: weighted survival probability from one environment sample
//! - **Interpretation**: threshold ladders turning each input into a note
//! - **Sampling**: Monte-Carlo draws over the scorer, reduced to summary statistics
//! - **Histogram**: equal-width binning of sampled probabilities

pub mod histogram;
pub mod interpretation;
pub mod sampling;
pub mod scoring;

pub use histogram::{histogram, Histogram, HistogramBin};
pub use interpretation::{interpret, Interpretation, InterpretationSet};
pub use sampling::{sample_distribution, seeded_rng, summarize, DEFAULT_SAMPLE_COUNT};
pub use scoring::{score, score_breakdown, score_sample, temperature_penalty, ScoreBreakdown};
