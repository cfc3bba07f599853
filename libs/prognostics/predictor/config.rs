//! Configuration for predictors
//!
//! The base predictor contract requires no recognized option today; the
//! config is accepted for forward compatibility and so that concrete
//! predictors can define their own options (e.g. sample count, random seed)
//! without changing the construction signature.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HORIZON, DEFAULT_STEP};
use crate::Time;

/// Configuration accepted by predictor construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Length of the prediction horizon, from the prediction start time
    pub horizon: Time,

    /// Propagation step for predictors that discretize time
    pub step: Time,

    /// Free-form options for concrete predictors (e.g. "sample_count",
    /// "seed"); unrecognized keys are ignored by the base contract
    pub options: HashMap<String, String>,
}

impl PredictorConfig {
    /// Create a configuration, validating the horizon and step
    pub fn new(horizon: Time, step: Time) -> Result<Self, PredictorConfigError> {
        let config = Self {
            horizon,
            step,
            options: HashMap::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration for testing
    pub fn for_testing() -> Self {
        Self {
            horizon: 10.0,
            step: 0.5,
            options: HashMap::new(),
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), PredictorConfigError> {
        if !self.horizon.is_finite() || self.horizon < 0.0 {
            return Err(PredictorConfigError::InvalidHorizon(self.horizon));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(PredictorConfigError::InvalidStep(self.step));
        }
        Ok(())
    }

    /// Raw option lookup
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Option lookup parsed as f64; `Ok(None)` when the key is absent
    pub fn option_f64(&self, key: &str) -> Result<Option<f64>, PredictorConfigError> {
        match self.options.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .map(Some)
                .map_err(|_| PredictorConfigError::InvalidOption {
                    key: key.to_string(),
                    value: raw.clone(),
                }),
        }
    }

    /// Option lookup parsed as usize; `Ok(None)` when the key is absent
    pub fn option_usize(&self, key: &str) -> Result<Option<usize>, PredictorConfigError> {
        match self.options.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<usize>()
                .map(Some)
                .map_err(|_| PredictorConfigError::InvalidOption {
                    key: key.to_string(),
                    value: raw.clone(),
                }),
        }
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            step: DEFAULT_STEP,
            options: HashMap::new(),
        }
    }
}

/// Error types for predictor configuration
#[derive(Debug, Clone, PartialEq)]
pub enum PredictorConfigError {
    /// Horizon must be finite and >= 0
    InvalidHorizon(Time),

    /// Step must be finite and > 0
    InvalidStep(Time),

    /// An option value failed to parse as the requested type
    InvalidOption { key: String, value: String },
}

impl std::fmt::Display for PredictorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictorConfigError::InvalidHorizon(value) => {
                write!(f, "Invalid horizon {} (must be finite and >= 0)", value)
            }
            PredictorConfigError::InvalidStep(value) => {
                write!(f, "Invalid step {} (must be finite and > 0)", value)
            }
            PredictorConfigError::InvalidOption { key, value } => {
                write!(f, "Invalid value {:?} for option {:?}", value, key)
            }
        }
    }
}

impl std::error::Error for PredictorConfigError {}
