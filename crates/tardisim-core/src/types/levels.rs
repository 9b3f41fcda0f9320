//! Threshold-derived qualitative levels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{SPREAD_CONCENTRATED_BELOW, SPREAD_MODERATE_BELOW};

/// Position of a parameter value on its three-step interpretation ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpretationLevel {
    /// value ≤ low threshold.
    Low,
    /// low threshold < value ≤ high threshold.
    Moderate,
    /// value > high threshold.
    High,
}

impl InterpretationLevel {
    /// Classify `value` against an inclusive (low, high) ladder.
    pub fn classify(value: f64, low: f64, high: f64) -> Self {
        if value <= low {
            Self::Low
        } else if value <= high {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for InterpretationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative spread of a sampled probability distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadBucket {
    /// std_dev < 10.
    Concentrated,
    /// 10 ≤ std_dev < 30.
    Moderate,
    /// std_dev ≥ 30.
    Dispersed,
}

impl SpreadBucket {
    /// Classify a population standard deviation.
    pub fn from_std_dev(std_dev: f64) -> Self {
        if std_dev < SPREAD_CONCENTRATED_BELOW {
            Self::Concentrated
        } else if std_dev < SPREAD_MODERATE_BELOW {
            Self::Moderate
        } else {
            Self::Dispersed
        }
    }

    /// Short bucket label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Concentrated => "concentrated/stable",
            Self::Moderate => "moderate/controlled variability",
            Self::Dispersed => "highly dispersed/variable conditions",
        }
    }

    /// One-sentence reading of the bucket for the histogram explanation.
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Concentrated => {
                "The distribution is tightly concentrated around the mean, indicating stable conditions."
            }
            Self::Moderate => {
                "The distribution is moderately spread, indicating controlled variability."
            }
            Self::Dispersed => {
                "The distribution is widely dispersed, suggesting highly variable conditions."
            }
        }
    }
}

impl fmt::Display for SpreadBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_bucket_boundaries() {
        assert_eq!(SpreadBucket::from_std_dev(0.0), SpreadBucket::Concentrated);
        assert_eq!(SpreadBucket::from_std_dev(9.999), SpreadBucket::Concentrated);
        assert_eq!(SpreadBucket::from_std_dev(10.0), SpreadBucket::Moderate);
        assert_eq!(SpreadBucket::from_std_dev(29.999), SpreadBucket::Moderate);
        assert_eq!(SpreadBucket::from_std_dev(30.0), SpreadBucket::Dispersed);
    }

    #[test]
    fn interpretation_level_thresholds_are_inclusive() {
        assert_eq!(InterpretationLevel::classify(20.0, 20.0, 50.0), InterpretationLevel::Low);
        assert_eq!(InterpretationLevel::classify(50.0, 20.0, 50.0), InterpretationLevel::Moderate);
        assert_eq!(InterpretationLevel::classify(50.001, 20.0, 50.0), InterpretationLevel::High);
    }
}
