//! Render requests handed to a drawing backend.

use crate::domain::{Journey, LatLon};
use crate::pipeline::ProcessedJourney;
use crate::trajectory::TrajectoryKind;

/// One line to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRequest {
    /// Points in travel order. May be empty or a single point.
    pub points: Vec<LatLon>,
    pub kind: TrajectoryKind,
}

/// One station circle to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationMarker {
    pub position: LatLon,
}

/// Everything a backend needs to draw the map.
///
/// Paths and markers are kept apart so backends can draw all markers on top
/// of all paths. Both lists follow input journey order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPlan {
    pub paths: Vec<PathRequest>,
    pub stations: Vec<StationMarker>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.stations.is_empty()
    }
}

/// Assemble render requests for all included journeys.
///
/// `processed[i]` must be the result for `journeys[i]`. Each included journey
/// yields one path (its boarding segment) and two markers at the recorded
/// departure and arrival coordinates; excluded journeys yield nothing.
pub fn build_render_plan(journeys: &[Journey], processed: &[ProcessedJourney]) -> RenderPlan {
    debug_assert_eq!(journeys.len(), processed.len());

    let mut plan = RenderPlan::default();

    for (journey, result) in journeys.iter().zip(processed) {
        let Some(trajectory) = result.drawable() else {
            continue;
        };

        let points = trajectory
            .boarding_segment(journey.dep_eva, journey.arr_eva)
            .iter()
            .map(|p| p.position())
            .collect();

        plan.paths.push(PathRequest {
            points,
            kind: trajectory.kind(),
        });
        plan.stations.push(StationMarker {
            position: journey.departure_position(),
        });
        plan.stations.push(StationMarker {
            position: journey.arrival_position(),
        });
    }

    plan
}
