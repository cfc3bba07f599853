//! Predicted discrete events

use serde::{Deserialize, Serialize};
use udata::UncertainValue;

/// One predicted discrete event (e.g. "system failure")
///
/// Immutable once constructed: the predicted time of event and the system
/// state at occurrence are fixed, and only read access is exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgEvent {
    name: String,
    time_of_event: UncertainValue,
    state_at_event: Vec<UncertainValue>,
}

impl ProgEvent {
    /// Create an event from its name, predicted time (or time distribution),
    /// and the uncertain state at occurrence.
    pub fn new(
        name: impl Into<String>,
        time_of_event: UncertainValue,
        state_at_event: Vec<UncertainValue>,
    ) -> Self {
        Self {
            name: name.into(),
            time_of_event,
            state_at_event,
        }
    }

    /// Event identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predicted time of event
    pub fn time_of_event(&self) -> &UncertainValue {
        &self.time_of_event
    }

    /// System state at the predicted occurrence
    pub fn state_at_event(&self) -> &[UncertainValue] {
        &self.state_at_event
    }
}
