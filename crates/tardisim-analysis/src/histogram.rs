//! Equal-width histogram of sampled probabilities.
//!
//! Bins span [min, max] of the data. Every bin is half-open `[start, end)`
//! except the last, which also includes `max`. A degenerate range (all
//! values equal) is widened to `[value − 0.5, value + 0.5]`.

use serde::Serialize;
use tardisim_core::SamplingError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Largest bin count (0 for no bins).
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Sum of all bin counts.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Bin `values` into `bins` equal-width buckets.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram, SamplingError> {
    if bins == 0 {
        return Err(SamplingError::InvalidBinCount { bins });
    }
    if values.is_empty() {
        return Err(SamplingError::EmptySampleCount);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &value in values {
        // Float division can land exactly on `bins` for value == hi.
        let idx = (((value - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let last = bins - 1;
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            end: if i == last {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count,
        })
        .collect();

    Ok(Histogram { bins })
}
