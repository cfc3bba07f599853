//! Error types for load estimation

use crate::Time;

/// Error types for load estimator operations
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEstimatorError {
    /// The estimator has no profile for the requested time
    HorizonExhausted { t: Time, horizon_end: Time },

    /// The estimator could not produce a load for another reason
    Unavailable(String),
}

impl std::fmt::Display for LoadEstimatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadEstimatorError::HorizonExhausted { t, horizon_end } => {
                write!(
                    f,
                    "No load profile available at t={} (horizon ends at {})",
                    t, horizon_end
                )
            }
            LoadEstimatorError::Unavailable(msg) => {
                write!(f, "Load estimate unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for LoadEstimatorError {}
