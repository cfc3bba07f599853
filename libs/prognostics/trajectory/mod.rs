//! Trajectory service collaborator interface
//!
//! A trajectory service tracks the path a system is expected to follow
//! (e.g. a planned route of waypoints) and, from that path, knows at which
//! future times intermediate prediction results should be captured. Every
//! trajectory service is therefore also a [`SavePointProvider`], and the
//! predictor registers it with its composite provider at construction.

use crate::savepoints::{SavePointError, SavePointProvider};
use crate::Time;

/// Read-only view of a planned system trajectory
pub trait TrajectoryService: SavePointProvider {
    /// End of the planned route, if bounded. Predictors may clamp their
    /// horizon to this time.
    fn route_end(&self) -> Option<Time>;
}

/// Trajectory service backed by a fixed list of waypoint times
///
/// Save points are the waypoints at or after the query time. Waypoints are
/// sorted at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointTrajectoryService {
    waypoints: Vec<Time>,
}

impl WaypointTrajectoryService {
    /// Create a service from waypoint times (any order; sorted internally)
    pub fn new(mut waypoints: Vec<Time>) -> Self {
        waypoints.sort_by(|a, b| a.total_cmp(b));
        Self { waypoints }
    }

    /// All waypoints, ascending
    pub fn waypoints(&self) -> &[Time] {
        &self.waypoints
    }
}

impl SavePointProvider for WaypointTrajectoryService {
    fn save_points(&self, now: Time) -> Result<Vec<Time>, SavePointError> {
        Ok(self
            .waypoints
            .iter()
            .copied()
            .filter(|&wp| wp >= now)
            .collect())
    }
}

impl TrajectoryService for WaypointTrajectoryService {
    fn route_end(&self) -> Option<Time> {
        self.waypoints.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoints_sorted_at_construction() {
        let service = WaypointTrajectoryService::new(vec![5.0, 1.0, 3.0]);
        assert_eq!(service.waypoints(), &[1.0, 3.0, 5.0]);
        assert_eq!(service.route_end(), Some(5.0));
    }

    #[test]
    fn test_save_points_filter_past() {
        let service = WaypointTrajectoryService::new(vec![1.0, 2.0, 3.0]);

        // Only waypoints at or after the query time remain
        assert_eq!(service.save_points(2.0).unwrap(), vec![2.0, 3.0]);
        assert_eq!(service.save_points(4.0).unwrap(), Vec::<Time>::new());
    }

    #[test]
    fn test_empty_route() {
        let service = WaypointTrajectoryService::new(vec![]);
        assert_eq!(service.route_end(), None);
        assert!(service.save_points(0.0).unwrap().is_empty());
    }
}
