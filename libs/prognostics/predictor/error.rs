//! Error types for predictor operations
//!
//! Two classes of failure reach the caller of `predict`:
//!
//! - **Contract violations**: programmer errors (state shape mismatch,
//!   setting observable names twice or after the first prediction). These
//!   fail fast and are never recovered internally.
//! - **Collaborator failures**: the load estimator or a save point provider
//!   could not produce a required value. Not retried internally; retry
//!   policy, if any, belongs to the caller. The predictor remains reusable
//!   for subsequent cycles.
//!
//! "Nothing left to forecast" is not an error; predictors return the shared
//! empty prediction for that case.

use crate::loading::LoadEstimatorError;
use crate::savepoints::SavePointError;

/// Error types surfaced by `predict` and predictor construction helpers
#[derive(Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// State shape does not match what the model expects (caller error)
    InvalidState { expected: usize, actual: usize },

    /// Observable names were already set once
    ObservablesAlreadySet,

    /// Observable names cannot change after the first prediction started
    ObservablesSetAfterPredict,

    /// The load estimator failed to produce a profile
    LoadEstimator(LoadEstimatorError),

    /// Save point collection failed
    SavePoints(SavePointError),
}

impl PredictorError {
    /// Whether this error is a programmer/contract error
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            PredictorError::InvalidState { .. }
                | PredictorError::ObservablesAlreadySet
                | PredictorError::ObservablesSetAfterPredict
        )
    }

    /// Whether this error came from a collaborator
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            PredictorError::LoadEstimator(_) | PredictorError::SavePoints(_)
        )
    }
}

impl std::fmt::Display for PredictorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictorError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "Invalid state size {} (model expects {})",
                    actual, expected
                )
            }
            PredictorError::ObservablesAlreadySet => {
                write!(f, "Observable names already set")
            }
            PredictorError::ObservablesSetAfterPredict => {
                write!(f, "Observable names cannot change after the first prediction")
            }
            PredictorError::LoadEstimator(source) => {
                write!(f, "Load estimation failed: {}", source)
            }
            PredictorError::SavePoints(source) => {
                write!(f, "Save point collection failed: {}", source)
            }
        }
    }
}

impl std::error::Error for PredictorError {}

impl From<LoadEstimatorError> for PredictorError {
    fn from(source: LoadEstimatorError) -> Self {
        PredictorError::LoadEstimator(source)
    }
}

impl From<SavePointError> for PredictorError {
    fn from(source: SavePointError) -> Self {
        PredictorError::SavePoints(source)
    }
}
