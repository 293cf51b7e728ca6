//! Per-journey inclusion decisions.

use std::fmt;

use crate::domain::{Journey, JourneyTimes};

use super::config::FilterConfig;

/// Why a journey was left off the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    /// A station name contains this excluded substring.
    Station(String),
    /// The journey arrived before the start of the window.
    BeforeStart,
    /// The journey departed after the end of the window.
    AfterEnd,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::Station(s) => write!(f, "station name contains {s:?}"),
            ExclusionReason::BeforeStart => f.write_str("arrived before start date"),
            ExclusionReason::AfterEnd => f.write_str("departed after end date"),
        }
    }
}

/// Whether a journey is drawn.
///
/// Decided once per journey and stored next to it. There is no way back from
/// `Excluded`: combining decisions keeps the first exclusion found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inclusion {
    Included,
    Excluded(ExclusionReason),
}

impl Inclusion {
    pub fn is_included(&self) -> bool {
        matches!(self, Inclusion::Included)
    }

    pub fn is_excluded(&self) -> bool {
        !self.is_included()
    }

    /// Returns the exclusion reason, if any.
    pub fn reason(&self) -> Option<&ExclusionReason> {
        match self {
            Inclusion::Included => None,
            Inclusion::Excluded(reason) => Some(reason),
        }
    }

    /// Combine with a further check; an existing exclusion always wins.
    pub fn or_else(self, check: impl FnOnce() -> Option<ExclusionReason>) -> Self {
        match self {
            Inclusion::Included => check().map_or(Inclusion::Included, Inclusion::Excluded),
            excluded => excluded,
        }
    }
}

/// Check a journey's station names against the exclusion list.
///
/// Needs nothing but the raw record, so it can run before any parsing.
pub fn station_exclusion(journey: &Journey, config: &FilterConfig) -> Option<ExclusionReason> {
    config
        .excluded_substring(&journey.dep_name, &journey.arr_name)
        .map(|s| ExclusionReason::Station(s.to_string()))
}

/// Check a journey's normalized times against the date window.
///
/// Both bounds are strict: arriving exactly at `start` or departing exactly
/// at `end` keeps the journey.
pub fn date_exclusion(times: &JourneyTimes, config: &FilterConfig) -> Option<ExclusionReason> {
    if config.start.is_some_and(|start| times.arrival < start) {
        return Some(ExclusionReason::BeforeStart);
    }

    if config.end.is_some_and(|end| times.departure > end) {
        return Some(ExclusionReason::AfterEnd);
    }

    None
}

/// Decide whether a journey is drawn.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use journey_map::domain::JourneyTimes;
/// # use journey_map::domain::{EvaCode, Journey};
/// use journey_map::filter::{ExclusionReason, FilterConfig, Inclusion, decide};
///
/// # let journey = Journey {
/// #     dep_name: "Mainz Hbf".into(), dep_lat: 50.0, dep_lon: 8.26, dep_eva: EvaCode::new(8000240),
/// #     arr_name: "Wiesbaden Hbf".into(), arr_lat: 50.07, arr_lon: 8.24, arr_eva: EvaCode::new(8000250),
/// #     real_dep_ts: "1704103200".into(), real_arr_ts: "1704104400".into(),
/// #     polyline: None, route: None,
/// # };
/// let times = JourneyTimes::new(
///     Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 1, 10, 20, 0).unwrap(),
/// );
///
/// let config = FilterConfig::new().with_excluded_stations(vec!["Wiesbaden".into()]);
/// assert_eq!(
///     decide(&journey, &times, &config),
///     Inclusion::Excluded(ExclusionReason::Station("Wiesbaden".into()))
/// );
///
/// assert!(decide(&journey, &times, &FilterConfig::default()).is_included());
/// ```
pub fn decide(journey: &Journey, times: &JourneyTimes, config: &FilterConfig) -> Inclusion {
    Inclusion::Included
        .or_else(|| station_exclusion(journey, config))
        .or_else(|| date_exclusion(times, config))
}
