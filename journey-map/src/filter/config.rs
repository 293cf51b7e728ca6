//! Filter configuration for the journey map.

use chrono::{DateTime, Utc};

/// Which journeys to draw.
///
/// The default configuration includes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Journeys arriving before this instant are excluded.
    pub start: Option<DateTime<Utc>>,

    /// Journeys departing after this instant are excluded.
    pub end: Option<DateTime<Utc>>,

    /// Journeys whose departure or arrival station name contains any of
    /// these substrings are excluded. Matching is case-sensitive.
    pub excluded_stations: Vec<String>,
}

impl FilterConfig {
    /// Create a configuration that excludes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start of the date window.
    pub fn with_start(mut self, start: Option<DateTime<Utc>>) -> Self {
        self.start = start;
        self
    }

    /// Set the end of the date window.
    pub fn with_end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.end = end;
        self
    }

    /// Set the station-name substrings to exclude.
    pub fn with_excluded_stations(mut self, stations: Vec<String>) -> Self {
        self.excluded_stations = stations;
        self
    }

    /// The first configured substring contained in either station name.
    pub fn excluded_substring(&self, departure: &str, arrival: &str) -> Option<&str> {
        self.excluded_stations
            .iter()
            .map(String::as_str)
            .find(|s| arrival.contains(s) || departure.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_config() {
        let config = FilterConfig::default();

        assert_eq!(config.start, None);
        assert_eq!(config.end, None);
        assert!(config.excluded_stations.is_empty());
    }

    #[test]
    fn builder_methods() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        let config = FilterConfig::new()
            .with_start(Some(start))
            .with_end(Some(end))
            .with_excluded_stations(vec!["Hbf".into()]);

        assert_eq!(config.start, Some(start));
        assert_eq!(config.end, Some(end));
        assert_eq!(config.excluded_stations, vec!["Hbf".to_string()]);
    }

    #[test]
    fn excluded_substring_first_match_wins() {
        let config =
            FilterConfig::new().with_excluded_stations(vec!["Berlin".into(), "Hbf".into()]);

        assert_eq!(config.excluded_substring("Köln Hbf", "Berlin Hbf"), Some("Berlin"));
        assert_eq!(config.excluded_substring("Köln Hbf", "Bonn"), Some("Hbf"));
        assert_eq!(config.excluded_substring("Bonn", "Köln Hbf"), Some("Hbf"));
        assert_eq!(config.excluded_substring("Bonn", "Köln Messe/Deutz"), None);
    }

    #[test]
    fn excluded_substring_is_case_sensitive() {
        let config = FilterConfig::new().with_excluded_stations(vec!["hbf".into()]);
        assert_eq!(config.excluded_substring("Köln Hbf", "Bonn Hbf"), None);
    }
}
