//! Constant load estimator
//!
//! The simplest useful estimator: the future load is assumed equal to a
//! fixed input vector for the entire horizon. Stateless, so it is safe to
//! reuse across predict invocations and yields deterministic predictions.

use crate::loading::error::LoadEstimatorError;
use crate::loading::LoadEstimator;
use crate::Time;

/// Load estimator that returns the same input vector for every time
#[derive(Debug, Clone, PartialEq)]
pub struct ConstLoadEstimator {
    loading: Vec<f64>,
}

impl ConstLoadEstimator {
    /// Create a constant estimator from the fixed input vector
    pub fn new(loading: Vec<f64>) -> Self {
        Self { loading }
    }

    /// The fixed input vector
    pub fn loading(&self) -> &[f64] {
        &self.loading
    }
}

impl LoadEstimator for ConstLoadEstimator {
    fn estimate_load(
        &mut self,
        _t: Time,
        _horizon_end: Time,
    ) -> Result<Vec<f64>, LoadEstimatorError> {
        Ok(self.loading.clone())
    }
}
