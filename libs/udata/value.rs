//! Uncertain value representations
//!
//! An [`UncertainValue`] is a single scalar quantity together with its
//! uncertainty. Four representations are supported:
//!
//! - `Point`: an exact value with no uncertainty
//! - `Gaussian`: mean and standard deviation
//! - `Samples`: an unweighted sample set (equal weights)
//! - `WeightedSamples`: a particle-style weighted sample set
//!
//! Validation happens at construction through the checked constructors;
//! direct enum construction is allowed for trusted call sites (e.g. tests)
//! but `validate` can always be called to re-check an instance.

use serde::{Deserialize, Serialize};

use crate::error::UncertainDataError;

/// One weighted sample in a particle-style representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedSample {
    pub value: f64,
    pub weight: f64,
}

/// A scalar value together with its uncertainty representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UncertainValue {
    /// Exact value, no uncertainty
    Point(f64),

    /// Gaussian uncertainty described by mean and standard deviation
    Gaussian { mean: f64, std_dev: f64 },

    /// Unweighted sample set (all samples equally likely)
    Samples(Vec<f64>),

    /// Weighted sample set (particle representation)
    WeightedSamples(Vec<WeightedSample>),
}

impl UncertainValue {
    /// Create a Gaussian value, validating the standard deviation
    pub fn gaussian(mean: f64, std_dev: f64) -> Result<Self, UncertainDataError> {
        if !(std_dev >= 0.0) {
            return Err(UncertainDataError::InvalidStdDev(std_dev));
        }
        Ok(UncertainValue::Gaussian { mean, std_dev })
    }

    /// Create an unweighted sample set, validating non-emptiness
    pub fn samples(samples: Vec<f64>) -> Result<Self, UncertainDataError> {
        if samples.is_empty() {
            return Err(UncertainDataError::EmptySamples);
        }
        Ok(UncertainValue::Samples(samples))
    }

    /// Create a weighted sample set, validating weights and total weight
    pub fn weighted_samples(samples: Vec<WeightedSample>) -> Result<Self, UncertainDataError> {
        if samples.is_empty() {
            return Err(UncertainDataError::EmptySamples);
        }
        let mut total = 0.0;
        for sample in &samples {
            if !sample.weight.is_finite() || sample.weight < 0.0 {
                return Err(UncertainDataError::InvalidWeight(sample.weight));
            }
            total += sample.weight;
        }
        if total <= 0.0 {
            return Err(UncertainDataError::InvalidTotalWeight(total));
        }
        Ok(UncertainValue::WeightedSamples(samples))
    }

    /// Re-check the invariants of this value
    pub fn validate(&self) -> Result<(), UncertainDataError> {
        match self {
            UncertainValue::Point(_) => Ok(()),
            UncertainValue::Gaussian { mean, std_dev } => {
                Self::gaussian(*mean, *std_dev).map(|_| ())
            }
            UncertainValue::Samples(samples) => Self::samples(samples.clone()).map(|_| ()),
            UncertainValue::WeightedSamples(samples) => {
                Self::weighted_samples(samples.clone()).map(|_| ())
            }
        }
    }

    /// Expected value of this quantity
    ///
    /// For sample representations this is the (weighted) sample mean.
    pub fn mean(&self) -> f64 {
        match self {
            UncertainValue::Point(value) => *value,
            UncertainValue::Gaussian { mean, .. } => *mean,
            UncertainValue::Samples(samples) => {
                if samples.is_empty() {
                    return f64::NAN;
                }
                samples.iter().sum::<f64>() / samples.len() as f64
            }
            UncertainValue::WeightedSamples(samples) => {
                let total: f64 = samples.iter().map(|s| s.weight).sum();
                if total <= 0.0 {
                    return f64::NAN;
                }
                samples.iter().map(|s| s.value * s.weight).sum::<f64>() / total
            }
        }
    }

    /// Variance of this quantity
    ///
    /// For sample representations this is the (weighted) population variance
    /// around the sample mean.
    pub fn variance(&self) -> f64 {
        match self {
            UncertainValue::Point(_) => 0.0,
            UncertainValue::Gaussian { std_dev, .. } => std_dev * std_dev,
            UncertainValue::Samples(samples) => {
                if samples.is_empty() {
                    return f64::NAN;
                }
                let mean = self.mean();
                samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>()
                    / samples.len() as f64
            }
            UncertainValue::WeightedSamples(samples) => {
                let total: f64 = samples.iter().map(|s| s.weight).sum();
                if total <= 0.0 {
                    return f64::NAN;
                }
                let mean = self.mean();
                samples
                    .iter()
                    .map(|s| s.weight * (s.value - mean) * (s.value - mean))
                    .sum::<f64>()
                    / total
            }
        }
    }

    /// Whether this value carries no uncertainty
    pub fn is_point(&self) -> bool {
        matches!(self, UncertainValue::Point(_))
    }
}
