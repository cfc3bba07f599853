//! Load estimation collaborator interface
//!
//! A load estimator supplies the assumed future external input/demand
//! profile that drives state evolution during prediction. Estimators may
//! carry internal state (e.g. sampled noise sequences), so the interface
//! takes `&mut self`; a predictor is the sole caller of its estimator during
//! a `predict` invocation.

pub mod const_load;
pub mod error;

pub use const_load::ConstLoadEstimator;
pub use error::LoadEstimatorError;

use crate::Time;

/// Supplier of future load/input profiles
pub trait LoadEstimator {
    /// Estimate the load (input vector) applied to the system at time `t`,
    /// within a prediction horizon ending at `horizon_end`.
    ///
    /// Returns an error if no profile can be produced for the requested
    /// time, e.g. the estimator's data is exhausted before `horizon_end`.
    fn estimate_load(&mut self, t: Time, horizon_end: Time) -> Result<Vec<f64>, LoadEstimatorError>;
}
