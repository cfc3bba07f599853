//! Prognostics model collaborator interface
//!
//! The predictor consumes a model through this narrow, read-only interface:
//! state-transition and output functions, event-threshold predicates, and the
//! name/shape metadata needed to validate inputs and label results. The
//! model's internal dynamics are owned by the implementing component and are
//! out of scope here.

use crate::Time;

/// Read-only view of a system's prognostic dynamics
///
/// Implementations must be safe to share across many predictor instances:
/// every method takes `&self` and no method may mutate observable model
/// state.
pub trait PrognosticsModel {
    /// Number of state variables the model expects.
    ///
    /// The state slice passed to `next_state`, `outputs`, and
    /// `threshold_reached` must have exactly this length, in the model's
    /// canonical variable order.
    fn state_size(&self) -> usize;

    /// Names of the discrete events this model can predict, in the order
    /// matching `threshold_reached`.
    fn event_names(&self) -> &[String];

    /// Names of the model's observable outputs, in the order matching
    /// `outputs`.
    fn output_names(&self) -> &[String];

    /// State-transition function: the state at `t + dt` given the state at
    /// `t` and the load (input vector) applied over the interval.
    fn next_state(&self, t: Time, state: &[f64], load: &[f64], dt: Time) -> Vec<f64>;

    /// Output function: the observable values implied by `state` at `t`.
    fn outputs(&self, t: Time, state: &[f64]) -> Vec<f64>;

    /// Event-threshold predicates: one flag per event (same order as
    /// `event_names`), true when that event's threshold condition holds for
    /// `state` at `t`.
    fn threshold_reached(&self, t: Time, state: &[f64]) -> Vec<bool>;
}
