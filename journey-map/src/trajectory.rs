//! Decoded trajectories and their classification.

use crate::domain::{EvaCode, Journey, Waypoint};
use crate::segment::boarding_segment;

/// How precisely a journey's path is known.
///
/// Drives styling downstream: exact trajectories follow the traced track,
/// beelines connect stops with straight lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrajectoryKind {
    /// Decoded from a fine-grained polyline.
    Exact,
    /// Decoded from a stop-level route.
    Beeline,
}

impl TrajectoryKind {
    /// Classify a journey by which geometry field it carries.
    pub fn of(journey: &Journey) -> Self {
        if journey.is_exact() {
            TrajectoryKind::Exact
        } else {
            TrajectoryKind::Beeline
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrajectoryKind::Exact => "exact",
            TrajectoryKind::Beeline => "beeline",
        }
    }
}

/// A journey's full decoded waypoint sequence with its classification.
///
/// The kind is fixed when the geometry is decoded and does not depend on how
/// much of the sequence survives trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    kind: TrajectoryKind,
    waypoints: Vec<Waypoint>,
}

impl Trajectory {
    pub fn new(kind: TrajectoryKind, waypoints: Vec<Waypoint>) -> Self {
        Self { kind, waypoints }
    }

    pub fn kind(&self) -> TrajectoryKind {
        self.kind
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The portion actually travelled between the two stations.
    pub fn boarding_segment(&self, departure: EvaCode, arrival: EvaCode) -> &[Waypoint] {
        boarding_segment(&self.waypoints, departure, arrival)
    }
}
