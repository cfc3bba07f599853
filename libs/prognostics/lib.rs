//! Prognostics predictor core
//!
//! This library is the predictive core of a model-based prognostics
//! framework: given a system's current estimated state, it forecasts future
//! events (e.g. failure thresholds being crossed) and the trajectories of
//! observable quantities over time.
//!
//! The central abstraction is the [`Predictor`] trait together with the
//! [`Prediction`] result contract. Concrete prediction algorithms (Monte
//! Carlo state propagation, unscented-transform predictors, ...) implement
//! [`Predictor`] and share orchestration through [`PredictorCore`]: a
//! composable helper that wires the prognostics model, load estimator, and
//! trajectory service together and aggregates save points through a single
//! [`CompositeSavePointProvider`].
//!
//! Collaborators are held by non-owning reference and must outlive the
//! predictor. The model and trajectory service are read-only; the load
//! estimator is held mutably (some estimators carry internal state, e.g.
//! sampled noise) and is the one documented source of cross-call state drift.

pub mod constants;
pub mod loading;
pub mod model;
pub mod prediction;
pub mod predictor;
pub mod savepoints;
pub mod trajectory;

pub use loading::{ConstLoadEstimator, LoadEstimator, LoadEstimatorError};
pub use model::PrognosticsModel;
pub use prediction::{DataPoint, Prediction, ProgEvent};
pub use predictor::{Predictor, PredictorConfig, PredictorConfigError, PredictorCore, PredictorError};
pub use savepoints::{CompositeSavePointProvider, SavePointError, SavePointProvider};
pub use trajectory::{TrajectoryService, WaypointTrajectoryService};

/// Time in the prediction horizon, in the model's time unit (0-based,
/// typically seconds since the start of the prognostic session)
pub type Time = f64;
