//! Uncertain data representation for prognostics
//!
//! This library provides the probability-bearing value type used throughout
//! the prognostics stack: system state variables, predicted event times, and
//! predicted observable values all carry uncertainty in one of several
//! representations (point value, Gaussian, sample set, weighted sample set).
//!
//! A system state estimate is an ordered slice of [`UncertainValue`]s; the
//! ordering is fixed by the model that produced it.

pub mod error;
pub mod value;

pub use error::UncertainDataError;
pub use value::{UncertainValue, WeightedSample};

/// Collapse a state estimate to its per-variable means.
///
/// Concrete predictors that propagate a single representative trajectory
/// (rather than sampling) use this to obtain a point state.
pub fn mean_of(state: &[UncertainValue]) -> Vec<f64> {
    state.iter().map(UncertainValue::mean).collect()
}
