//! Save point aggregation
//!
//! A save point is a future time at which intermediate prediction results
//! should be captured. Several subsystems may want save points (the
//! trajectory service always does; a load estimator might, for instance,
//! want captures at its sampling times), so the predictor queries one
//! [`CompositeSavePointProvider`] that merges the points of every registered
//! provider into a single ascending, duplicate-free sequence.

pub mod composite;
pub mod error;
pub mod provider;

pub use composite::CompositeSavePointProvider;
pub use error::SavePointError;
pub use provider::SavePointProvider;
