//! Decoded trajectory points.

use super::EvaCode;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A single decoded trajectory point.
///
/// Most points of a traced polyline carry no station code; every point of a
/// stop-level route carries one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    pub eva: Option<EvaCode>,
}

impl Waypoint {
    /// A point between stations.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            eva: None,
        }
    }

    /// A point at a station.
    pub fn at_station(lat: f64, lon: f64, eva: EvaCode) -> Self {
        Self {
            lat,
            lon,
            eva: Some(eva),
        }
    }

    /// Returns true if this point is tagged with the given station code.
    pub fn is_station(&self, eva: EvaCode) -> bool {
        self.eva == Some(eva)
    }

    pub fn position(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}
