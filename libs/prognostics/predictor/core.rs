//! Shared predictor orchestration
//!
//! [`PredictorCore`] factors out what every concrete predictor needs:
//! non-owning references to the collaborators, the composite save point
//! provider (with the trajectory service registered by default), the
//! configuration, and the one-time-set observable-name list. Concrete
//! predictors own a core and delegate to it, keeping the algorithm itself as
//! the only code they write.

use tracing::debug;
use udata::UncertainValue;

use crate::loading::LoadEstimator;
use crate::model::PrognosticsModel;
use crate::predictor::config::PredictorConfig;
use crate::predictor::error::PredictorError;
use crate::savepoints::{CompositeSavePointProvider, SavePointProvider};
use crate::trajectory::TrajectoryService;
use crate::Time;

/// Collaborator wiring and shared state for a concrete predictor
///
/// The core does not own the model, load estimator, or trajectory service;
/// all three are borrowed and must outlive the core. The model and
/// trajectory service are read-only; the load estimator is borrowed mutably
/// because estimators may advance internal state when queried.
pub struct PredictorCore<'a> {
    model: &'a dyn PrognosticsModel,
    load_estimator: &'a mut dyn LoadEstimator,
    trajectory_service: &'a dyn TrajectoryService,
    save_point_provider: CompositeSavePointProvider<'a>,
    config: PredictorConfig,
    observables: Vec<String>,
    observables_set: bool,
    predict_started: bool,
}

impl<'a> PredictorCore<'a> {
    /// Wire a core to its collaborators.
    ///
    /// The trajectory service is registered with the composite save point
    /// provider here, so every predictor automatically asks it for capture
    /// times; concrete predictors may register further sources with
    /// [`add_save_point_provider`](Self::add_save_point_provider).
    pub fn new<T: TrajectoryService>(
        model: &'a dyn PrognosticsModel,
        load_estimator: &'a mut dyn LoadEstimator,
        trajectory_service: &'a T,
        config: PredictorConfig,
    ) -> Self {
        let mut save_point_provider = CompositeSavePointProvider::new();
        save_point_provider.add(trajectory_service);

        debug!(
            horizon = config.horizon,
            step = config.step,
            state_size = model.state_size(),
            "predictor core initialized"
        );

        Self {
            model,
            load_estimator,
            trajectory_service,
            save_point_provider,
            config,
            observables: Vec::new(),
            observables_set: false,
            predict_started: false,
        }
    }

    /// The prognostics model (read-only)
    pub fn model(&self) -> &dyn PrognosticsModel {
        self.model
    }

    /// The trajectory service (read-only)
    pub fn trajectory_service(&self) -> &dyn TrajectoryService {
        self.trajectory_service
    }

    /// The load estimator; mutable because estimation may advance its
    /// internal state
    pub fn load_estimator(&mut self) -> &mut dyn LoadEstimator {
        &mut *self.load_estimator
    }

    /// The configuration this predictor was constructed with
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Register an additional save point source (e.g. a load estimator that
    /// wants captures at its sampling times)
    pub fn add_save_point_provider(&mut self, provider: &'a dyn SavePointProvider) {
        self.save_point_provider.add(provider);
    }

    /// Save points for a prediction starting at `t`: the union of every
    /// registered provider's points, ascending, duplicate-free. Queried
    /// fresh on each call.
    pub fn save_points(&self, t: Time) -> Result<Vec<Time>, PredictorError> {
        let points = self.save_point_provider.save_points(t)?;
        debug!(t, count = points.len(), "collected save points");
        Ok(points)
    }

    /// Fix the observable-name list.
    ///
    /// One-time-set: a second call fails with `ObservablesAlreadySet`, and
    /// any call after the first prediction has begun fails with
    /// `ObservablesSetAfterPredict`. Intended to be called during concrete
    /// predictor construction.
    pub fn set_observable_names(&mut self, names: Vec<String>) -> Result<(), PredictorError> {
        if self.predict_started {
            return Err(PredictorError::ObservablesSetAfterPredict);
        }
        if self.observables_set {
            return Err(PredictorError::ObservablesAlreadySet);
        }
        self.observables = names;
        self.observables_set = true;
        Ok(())
    }

    /// The observable-name list fixed at construction (empty if never set)
    pub fn observable_names(&self) -> &[String] {
        &self.observables
    }

    /// Validate predict inputs and seal the observable-name list.
    ///
    /// Concrete predictors call this at the top of `predict`. The state
    /// shape is checked against the model; a mismatch is a caller error.
    pub fn begin_predict(
        &mut self,
        t: Time,
        state: &[UncertainValue],
    ) -> Result<(), PredictorError> {
        let expected = self.model.state_size();
        if state.len() != expected {
            return Err(PredictorError::InvalidState {
                expected,
                actual: state.len(),
            });
        }

        self.predict_started = true;
        debug!(t, state_size = state.len(), "starting prediction");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::ConstLoadEstimator;
    use crate::trajectory::WaypointTrajectoryService;

    struct NullModel {
        events: Vec<String>,
        outputs: Vec<String>,
    }

    impl NullModel {
        fn new() -> Self {
            Self {
                events: vec!["failure".to_string()],
                outputs: vec!["x".to_string()],
            }
        }
    }

    impl PrognosticsModel for NullModel {
        fn state_size(&self) -> usize {
            1
        }

        fn event_names(&self) -> &[String] {
            &self.events
        }

        fn output_names(&self) -> &[String] {
            &self.outputs
        }

        fn next_state(&self, _t: Time, state: &[f64], _load: &[f64], _dt: Time) -> Vec<f64> {
            state.to_vec()
        }

        fn outputs(&self, _t: Time, state: &[f64]) -> Vec<f64> {
            state.to_vec()
        }

        fn threshold_reached(&self, _t: Time, _state: &[f64]) -> Vec<bool> {
            vec![false]
        }
    }

    #[test]
    fn test_trajectory_service_registered_by_default() {
        let model = NullModel::new();
        let mut estimator = ConstLoadEstimator::new(vec![0.0]);
        let service = WaypointTrajectoryService::new(vec![1.0, 2.0]);

        let core = PredictorCore::new(&model, &mut estimator, &service, PredictorConfig::for_testing());

        // The trajectory service's waypoints come back without any explicit add
        assert_eq!(core.save_points(0.0).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_observable_names_one_time_set() {
        let model = NullModel::new();
        let mut estimator = ConstLoadEstimator::new(vec![0.0]);
        let service = WaypointTrajectoryService::new(vec![]);

        let mut core =
            PredictorCore::new(&model, &mut estimator, &service, PredictorConfig::for_testing());
        assert!(core.observable_names().is_empty());

        core.set_observable_names(vec!["x".to_string()]).unwrap();
        assert_eq!(core.observable_names(), &["x".to_string()]);

        // Second set fails
        assert_eq!(
            core.set_observable_names(vec!["y".to_string()]),
            Err(PredictorError::ObservablesAlreadySet)
        );
    }

    #[test]
    fn test_state_shape_validation() {
        let model = NullModel::new();
        let mut estimator = ConstLoadEstimator::new(vec![0.0]);
        let service = WaypointTrajectoryService::new(vec![]);

        let mut core =
            PredictorCore::new(&model, &mut estimator, &service, PredictorConfig::for_testing());

        let too_wide = vec![UncertainValue::Point(1.0), UncertainValue::Point(2.0)];
        let result = core.begin_predict(0.0, &too_wide);
        assert_eq!(
            result,
            Err(PredictorError::InvalidState {
                expected: 1,
                actual: 2
            })
        );
        assert!(result.unwrap_err().is_contract_violation());
    }
}
