//! Predicted observable trajectories

use serde::{Deserialize, Serialize};
use udata::UncertainValue;

use crate::Time;

/// One observable quantity's predicted trajectory over the horizon
///
/// Holds the observable's name and its value (point or distribution) at each
/// save point, ascending by time. Immutable once placed into a
/// [`Prediction`](crate::prediction::Prediction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    name: String,
    values: Vec<(Time, UncertainValue)>,
}

impl DataPoint {
    /// Create a trajectory from its observable name and `(time, value)`
    /// entries, one per save point, ascending by time.
    pub fn new(name: impl Into<String>, values: Vec<(Time, UncertainValue)>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Observable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `(time, value)` entries, ascending by time
    pub fn values(&self) -> &[(Time, UncertainValue)] {
        &self.values
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no entries were recorded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
