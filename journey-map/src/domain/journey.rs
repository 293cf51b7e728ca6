//! Recorded journeys as found in a travel-log export.

use std::fmt;

use serde::Deserialize;

use super::{EvaCode, LatLon};

/// One recorded trip.
///
/// Field names follow the export format. Timestamps and geometry stay in
/// their raw textual form here; normalization happens in the pipeline and
/// its results are kept next to the journey rather than written back into it.
#[derive(Debug, Clone, Deserialize)]
pub struct Journey {
    pub dep_name: String,
    pub dep_lat: f64,
    pub dep_lon: f64,
    pub dep_eva: EvaCode,

    pub arr_name: String,
    pub arr_lat: f64,
    pub arr_lon: f64,
    pub arr_eva: EvaCode,

    /// Real departure time, seconds since the epoch as text.
    pub real_dep_ts: String,
    /// Real arrival time, seconds since the epoch as text.
    pub real_arr_ts: String,

    /// Fine-grained trace as JSON text: `[[lon, lat, eva?], ...]`.
    #[serde(default)]
    pub polyline: Option<String>,

    /// Stop-level route as JSON text: `[[ordinal, eva, {"lat", "lon"}], ...]`.
    #[serde(default)]
    pub route: Option<String>,
}

impl Journey {
    /// Returns the polyline payload if present and non-empty.
    pub fn polyline(&self) -> Option<&str> {
        self.polyline.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the route payload if present and non-empty.
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether this journey carries a traced polyline.
    pub fn is_exact(&self) -> bool {
        self.polyline().is_some()
    }

    pub fn departure_position(&self) -> LatLon {
        LatLon::new(self.dep_lat, self.dep_lon)
    }

    pub fn arrival_position(&self) -> LatLon {
        LatLon::new(self.arr_lat, self.arr_lon)
    }

    /// Human-readable identification used in error messages.
    pub fn label(&self) -> JourneyLabel {
        JourneyLabel {
            from: self.dep_name.clone(),
            to: self.arr_name.clone(),
        }
    }
}

/// Identifies a journey by its endpoint display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyLabel {
    pub from: String,
    pub to: String,
}

impl fmt::Display for JourneyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "journey from {} to {}", self.from, self.to)
    }
}

/// Top-level layout of an export file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Export {
    #[serde(default)]
    pub journeys: Vec<Journey>,
}


#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "journeys": [
            {
                "dep_name": "Frankfurt(Main)Hbf",
                "dep_lat": 50.107,
                "dep_lon": 8.663,
                "dep_eva": 8000105,
                "arr_name": "Nürnberg Hbf",
                "arr_lat": 49.445,
                "arr_lon": 11.082,
                "arr_eva": 8000284,
                "real_dep_ts": "1710000000",
                "real_arr_ts": "1710007200",
                "polyline": "[[8.663, 50.107, 8000105]]",
                "route": "",
                "train_type": "ICE"
            },
            {
                "dep_name": "A",
                "dep_lat": 1.0,
                "dep_lon": 2.0,
                "dep_eva": 1,
                "arr_name": "B",
                "arr_lat": 3.0,
                "arr_lon": 4.0,
                "arr_eva": 2,
                "real_dep_ts": "1",
                "real_arr_ts": "2",
                "polyline": null,
                "route": "[[0, 1, {\"lat\": 1.0, \"lon\": 2.0}]]"
            }
        ]
    }"#;

    #[test]
    fn deserialize_export() {
        let export: Export = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(export.journeys.len(), 2);

        let first = &export.journeys[0];
        assert_eq!(first.dep_eva, EvaCode::new(8000105));
        assert_eq!(first.arr_name, "Nürnberg Hbf");
        assert!(first.is_exact());
        assert_eq!(first.route(), None);

        let second = &export.journeys[1];
        assert!(!second.is_exact());
        assert!(second.route().is_some());
    }

    #[test]
    fn empty_polyline_is_not_exact() {
        let mut journey = fixtures::journey("A", "B");
        journey.polyline = Some(String::new());
        assert!(!journey.is_exact());
        assert_eq!(journey.polyline(), None);
    }

    #[test]
    fn label_display() {
        let journey = fixtures::journey("Köln Hbf", "Bonn Hbf");
        assert_eq!(journey.label().to_string(), "journey from Köln Hbf to Bonn Hbf");
    }

    #[test]
    fn marker_positions_come_from_record() {
        let journey = fixtures::journey("A", "B");
        assert_eq!(journey.departure_position(), LatLon::new(50.107, 8.663));
        assert_eq!(journey.arrival_position(), LatLon::new(49.445, 11.082));
    }
}
