//! The predictor abstraction
//!
//! [`Predictor`] is the capability interface concrete prediction algorithms
//! implement; [`PredictorCore`] is the composable helper they share for
//! collaborator wiring, save point aggregation, observable-name management,
//! and input validation. No implementation inheritance is involved: a
//! concrete predictor owns a `PredictorCore` and delegates to it.
//!
//! ## Contract
//!
//! A predictor instance is invoked many times across a prognostic session
//! and must be safe to call repeatedly. The only documented source of
//! cross-call state drift is the load estimator, which is held mutably;
//! predictors must not mutate the model or trajectory service. A failed
//! predict cycle leaves the predictor reusable for subsequent cycles.
//!
//! Single-threaded by contract: a predictor must not be invoked concurrently
//! when its load estimator carries mutable state (the common case). No
//! operation suspends, blocks on I/O, or supports cancellation; callers
//! needing cancellation run predictions on a worker and discard results.

pub mod config;
pub mod core;
pub mod error;

pub use config::{PredictorConfig, PredictorConfigError};
pub use error::PredictorError;
pub use self::core::PredictorCore;

use crate::prediction::Prediction;
use crate::Time;
use udata::UncertainValue;

/// A model-based predictor of future events and observable trajectories
pub trait Predictor {
    /// Predict future events and values of system variables.
    ///
    /// `t` is the time at which the state estimate is valid; `state` is the
    /// system's estimated state at `t`, whose size and ordering must match
    /// what the model expects (a mismatch is a caller error and fails with
    /// [`PredictorError::InvalidState`]). The state is borrowed for the call
    /// only and is not retained.
    ///
    /// Returns the shared empty [`Prediction`] when there is nothing left to
    /// forecast; collaborator failures surface as errors, never as a
    /// partially-filled prediction.
    fn predict(&mut self, t: Time, state: &[UncertainValue])
        -> Result<Prediction, PredictorError>;

    /// Names of the observables this predictor reports, in the order their
    /// trajectories appear in each [`Prediction`]. Stable for the lifetime
    /// of the predictor.
    fn observable_names(&self) -> &[String];
}
