//! Prediction result data model
//!
//! A [`Prediction`] is the immutable value a predictor returns: an ordered
//! sequence of predicted discrete events ([`ProgEvent`]) and an ordered
//! sequence of predicted observable trajectories ([`DataPoint`]). Both
//! sequences are fixed at construction.
//!
//! A process-wide shared empty prediction represents "no result" without
//! repeated allocation; see [`Prediction::empty`].

pub mod data_point;
pub mod event;
pub mod result;

pub use data_point::DataPoint;
pub use event::ProgEvent;
pub use result::Prediction;
