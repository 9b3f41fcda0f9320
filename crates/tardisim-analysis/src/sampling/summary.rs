//! Reduction of a probability sample into summary statistics.

use statrs::statistics::{Data, Max, Min, OrderStatistics};
use tardisim_core::{DistributionSummary, SamplingError, SpreadBucket};

/// Reduce sampled probabilities to mean, population std_dev, bucket, and
/// order statistics. Samples are kept in their original order.
///
/// ```text
/// mean    = Σx / n
/// std_dev = sqrt(Σ(x − mean)² / n)
/// ```
pub fn summarize(samples: Vec<f64>) -> Result<DistributionSummary, SamplingError> {
    if samples.is_empty() {
        return Err(SamplingError::EmptySampleCount);
    }

    let mean = mean(&samples);
    let std_dev = population_std_dev(&samples, mean);
    let bucket = SpreadBucket::from_std_dev(std_dev);

    // Order statistics work on a sorted copy; `samples` keeps draw order.
    let mut data = Data::new(samples.clone());
    let min = data.min();
    let max = data.max();
    let median = data.median();
    let p5 = data.percentile(5);
    let p95 = data.percentile(95);

    Ok(DistributionSummary {
        samples,
        mean,
        std_dev,
        bucket,
        bucket_label: bucket.label().to_string(),
        min,
        max,
        median,
        p5,
        p95,
    })
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Divides by n, not n − 1.
fn population_std_dev(samples: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = samples
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum();
    (sum_sq / samples.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_not_sample_std_dev() {
        // Population std of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(population_std_dev(&values, 5.0), 2.0);
    }
}
