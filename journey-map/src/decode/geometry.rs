//! Conversion from raw geometry payloads to trajectories.
//!
//! A journey carries either a traced polyline or a stop-level route. Both are
//! JSON stored as text, with station codes that may be numbers or decimal
//! strings. This module resolves all of that into one waypoint sequence.

use crate::domain::{EvaCode, Journey, Waypoint};
use crate::trajectory::{Trajectory, TrajectoryKind};

use super::error::{DecodeError, GeometryField};
use super::types::{RawPolyline, RawRoute};

/// Decode a journey's geometry.
///
/// The polyline takes precedence when non-empty; the route is used otherwise.
/// The resulting trajectory is classified by [`TrajectoryKind::of`].
pub fn decode_geometry(journey: &Journey) -> Result<Trajectory, DecodeError> {
    let kind = TrajectoryKind::of(journey);
    let waypoints = match kind {
        TrajectoryKind::Exact => journey.polyline().map(decode_polyline),
        TrajectoryKind::Beeline => journey.route().map(decode_route),
    }
    .ok_or(DecodeError::NoGeometry)??;

    Ok(Trajectory::new(kind, waypoints))
}

/// Decode a polyline payload.
///
/// Each point is `[lon, lat]` or `[lon, lat, eva]`; note longitude comes
/// first. Elements past the third are ignored.
///
/// # Examples
///
/// ```
/// use journey_map::decode::decode_polyline;
/// use journey_map::domain::EvaCode;
///
/// let points = decode_polyline(r#"[[8.6, 50.1, "123"], [8.7, 50.2], [8.8, 50.3, 456]]"#).unwrap();
/// assert_eq!(points[0].lat, 50.1);
/// assert_eq!(points[0].lon, 8.6);
/// assert_eq!(points[0].eva, Some(EvaCode::new(123)));
/// assert_eq!(points[1].eva, None);
/// assert_eq!(points[2].eva, Some(EvaCode::new(456)));
/// ```
pub fn decode_polyline(text: &str) -> Result<Vec<Waypoint>, DecodeError> {
    const FIELD: GeometryField = GeometryField::Polyline;

    let raw: RawPolyline = serde_json::from_str(text).map_err(|source| DecodeError::Json {
        field: FIELD,
        source,
    })?;

    let mut waypoints = Vec::with_capacity(raw.len());

    for (index, point) in raw.iter().enumerate() {
        let coordinate = |pos: usize, reason: &'static str| {
            point
                .get(pos)
                .and_then(serde_json::Value::as_f64)
                .ok_or(DecodeError::MalformedPoint {
                    field: FIELD,
                    index,
                    reason,
                })
        };

        let lon = coordinate(0, "missing or non-numeric longitude")?;
        let lat = coordinate(1, "missing or non-numeric latitude")?;

        let eva = point
            .get(2)
            .map(EvaCode::from_json)
            .transpose()
            .map_err(|source| DecodeError::InvalidEva {
                field: FIELD,
                index,
                source,
            })?;

        waypoints.push(Waypoint { lat, lon, eva });
    }

    Ok(waypoints)
}

/// Decode a route payload.
///
/// Each entry is `[ordinal, eva, {"lat": .., "lon": ..}]`. Unlike the
/// polyline, positions are given by name, so nothing is swapped. The ordinal
/// and any elements past the third are ignored.
///
/// # Examples
///
/// ```
/// use journey_map::decode::decode_route;
/// use journey_map::domain::{EvaCode, Waypoint};
///
/// let points = decode_route(r#"[[1, "100", {"lat": 50.1, "lon": 8.6}]]"#).unwrap();
/// assert_eq!(points, vec![Waypoint::at_station(50.1, 8.6, EvaCode::new(100))]);
/// ```
pub fn decode_route(text: &str) -> Result<Vec<Waypoint>, DecodeError> {
    const FIELD: GeometryField = GeometryField::Route;

    let raw: RawRoute = serde_json::from_str(text).map_err(|source| DecodeError::Json {
        field: FIELD,
        source,
    })?;

    raw.iter()
        .enumerate()
        .map(|(index, stop)| {
            let malformed = |reason: &'static str| DecodeError::MalformedPoint {
                field: FIELD,
                index,
                reason,
            };
            let coordinate = |key: &str, reason: &'static str| {
                stop.get(2)
                    .and_then(|details| details.get(key))
                    .and_then(serde_json::Value::as_f64)
                    .ok_or_else(|| malformed(reason))
            };

            let eva = stop.get(1).ok_or_else(|| malformed("missing station code"))?;
            let eva = EvaCode::from_json(eva).map_err(|source| DecodeError::InvalidEva {
                field: FIELD,
                index,
                source,
            })?;
            let lat = coordinate("lat", "missing or non-numeric latitude")?;
            let lon = coordinate("lon", "missing or non-numeric longitude")?;

            Ok(Waypoint::at_station(lat, lon, eva))
        })
        .collect()
}
