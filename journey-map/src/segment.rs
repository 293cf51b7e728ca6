//! Boarding-segment extraction.
//!
//! A recorded trajectory usually covers the whole run of a train. Only the
//! stretch between the traveller's departure and arrival stations is drawn.

use tracing::trace;

use crate::domain::{EvaCode, Waypoint};

/// Trim a waypoint sequence to the portion actually travelled.
///
/// The segment starts at the first waypoint tagged with `departure` and ends
/// at the first waypoint tagged with `arrival` at or after that point,
/// inclusive. Untagged waypoints in between are carried along.
///
/// - If `departure` never occurs, the segment is empty. Nothing is boarded,
///   so nothing is drawn.
/// - If `arrival` never occurs after boarding, the segment runs to the end.
/// - If `arrival` occurs more than once, the first occurrence ends the trip.
///
/// # Examples
///
/// ```
/// use journey_map::domain::{EvaCode, Waypoint};
/// use journey_map::segment::boarding_segment;
///
/// let points: Vec<Waypoint> = (1..=4)
///     .map(|i| Waypoint::at_station(50.0, 8.0 + i as f64, EvaCode::new(i)))
///     .collect();
///
/// let segment = boarding_segment(&points, EvaCode::new(2), EvaCode::new(3));
/// assert_eq!(segment, &points[1..3]);
///
/// assert!(boarding_segment(&points, EvaCode::new(99), EvaCode::new(3)).is_empty());
/// ```
pub fn boarding_segment(
    waypoints: &[Waypoint],
    departure: EvaCode,
    arrival: EvaCode,
) -> &[Waypoint] {
    let Some(start) = waypoints.iter().position(|p| p.is_station(departure)) else {
        trace!(%departure, points = waypoints.len(), "departure station not on trajectory");
        return &[];
    };

    let end = waypoints[start..]
        .iter()
        .position(|p| p.is_station(arrival))
        .map_or(waypoints.len(), |offset| start + offset + 1);

    trace!(start, end, points = waypoints.len(), "trimmed trajectory");
    &waypoints[start..end]
}
