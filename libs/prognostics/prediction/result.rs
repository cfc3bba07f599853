//! The prediction result value

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::prediction::data_point::DataPoint;
use crate::prediction::event::ProgEvent;

static EMPTY_PREDICTION: OnceLock<Prediction> = OnceLock::new();

/// Immutable bundle of predicted events and observable trajectories
///
/// Constructed once from finite ordered sequences (either may be empty) and
/// never mutated afterwards; only read-only, order-preserving access is
/// exposed.
///
/// "No result" is represented by the shared empty prediction from
/// [`Prediction::empty`]. That instance is flagged at its construction site,
/// so callers detect "no prediction happened" through
/// [`Prediction::is_unavailable`] rather than by checking the sequences for
/// emptiness — a constructed prediction with zero events and zero
/// observables is structurally identical but reports `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    events: Vec<ProgEvent>,
    observables: Vec<DataPoint>,
    unavailable: bool,
}

impl Prediction {
    /// Create a prediction from its event and observable sequences
    pub fn new(events: Vec<ProgEvent>, observables: Vec<DataPoint>) -> Self {
        Self {
            events,
            observables,
            unavailable: false,
        }
    }

    /// The shared empty prediction
    ///
    /// Lazily initialized once per process and identity-stable across calls.
    /// It has zero events and zero observables, reports
    /// `is_unavailable() == true`, and must never be mutated (nothing in the
    /// API allows it). Predictors that cannot produce a meaningful result
    /// return a clone of this instance; the flag survives the clone.
    pub fn empty() -> &'static Prediction {
        EMPTY_PREDICTION.get_or_init(|| Prediction {
            events: Vec::new(),
            observables: Vec::new(),
            unavailable: true,
        })
    }

    /// Predicted events, in construction order
    pub fn events(&self) -> &[ProgEvent] {
        &self.events
    }

    /// Predicted observable trajectories, in construction order
    pub fn observables(&self) -> &[DataPoint] {
        &self.observables
    }

    /// Whether this value is the "no prediction happened" sentinel (or a
    /// clone of it)
    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }
}
