//! Per-journey processing and the batch driver.

use tracing::{debug, info};

use crate::decode::decode_geometry;
use crate::domain::{Journey, JourneyTimes, TimestampField, parse_timestamp};
use crate::filter::{FilterConfig, Inclusion, decide, station_exclusion};
use crate::trajectory::{Trajectory, TrajectoryKind};

use super::error::ProcessError;

/// Everything derived from one journey.
///
/// Journeys excluded by station name are not parsed any further, so they
/// carry neither times nor a trajectory. Journeys excluded by date are still
/// fully decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedJourney {
    pub inclusion: Inclusion,
    pub times: Option<JourneyTimes>,
    pub trajectory: Option<Trajectory>,
}

impl ProcessedJourney {
    /// The trajectory, if this journey is to be drawn.
    pub fn drawable(&self) -> Option<&Trajectory> {
        if self.inclusion.is_included() {
            self.trajectory.as_ref()
        } else {
            None
        }
    }
}

/// Counts over a processed batch, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub total: usize,
    pub included: usize,
    pub excluded: usize,
    pub exact: usize,
    pub beeline: usize,
}

impl ProcessSummary {
    pub fn of(processed: &[ProcessedJourney]) -> Self {
        processed.iter().fold(
            Self {
                total: processed.len(),
                ..Self::default()
            },
            |mut summary, p| {
                match p.drawable().map(Trajectory::kind) {
                    Some(TrajectoryKind::Exact) => summary.exact += 1,
                    Some(TrajectoryKind::Beeline) => summary.beeline += 1,
                    None => {}
                }
                if p.inclusion.is_included() {
                    summary.included += 1;
                } else {
                    summary.excluded += 1;
                }
                summary
            },
        )
    }
}

fn parse_times(journey: &Journey) -> Result<JourneyTimes, ProcessError> {
    let parse = |raw: &str, field| {
        parse_timestamp(raw).map_err(|source| ProcessError::TimeParse {
            journey: journey.label(),
            field,
            source,
        })
    };

    Ok(JourneyTimes::new(
        parse(&journey.real_dep_ts, TimestampField::Departure)?,
        parse(&journey.real_arr_ts, TimestampField::Arrival)?,
    ))
}

/// Normalize, filter and decode a single journey.
pub fn process_journey(
    journey: &Journey,
    config: &FilterConfig,
) -> Result<ProcessedJourney, ProcessError> {
    if let Some(reason) = station_exclusion(journey, config) {
        debug!(journey = %journey.label(), %reason, "excluded");
        return Ok(ProcessedJourney {
            inclusion: Inclusion::Excluded(reason),
            times: None,
            trajectory: None,
        });
    }

    let times = parse_times(journey)?;
    let inclusion = decide(journey, &times, config);
    if let Some(reason) = inclusion.reason() {
        debug!(journey = %journey.label(), %reason, "excluded");
    }

    let trajectory = decode_geometry(journey).map_err(|source| ProcessError::Decode {
        journey: journey.label(),
        source,
    })?;

    Ok(ProcessedJourney {
        inclusion,
        times: Some(times),
        trajectory: Some(trajectory),
    })
}

/// Process a whole batch in input order.
///
/// Stops at the first failing journey.
pub fn process_journeys(
    journeys: &[Journey],
    config: &FilterConfig,
) -> Result<Vec<ProcessedJourney>, ProcessError> {
    let processed = journeys
        .iter()
        .map(|journey| process_journey(journey, config))
        .collect::<Result<Vec<_>, _>>()?;

    log_summary(&processed);
    Ok(processed)
}

/// Process a whole batch using rayon.
///
/// Same results as [`process_journeys`], in the same order. If several
/// journeys fail, which error is returned is unspecified.
#[cfg(feature = "parallel")]
pub fn process_journeys_parallel(
    journeys: &[Journey],
    config: &FilterConfig,
) -> Result<Vec<ProcessedJourney>, ProcessError> {
    use rayon::prelude::*;

    let processed = journeys
        .par_iter()
        .map(|journey| process_journey(journey, config))
        .collect::<Result<Vec<_>, _>>()?;

    log_summary(&processed);
    Ok(processed)
}

fn log_summary(processed: &[ProcessedJourney]) {
    let summary = ProcessSummary::of(processed);
    info!(
        total = summary.total,
        included = summary.included,
        excluded = summary.excluded,
        exact = summary.exact,
        beeline = summary.beeline,
        "processed journeys"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeError;
    use crate::domain::{EvaCode, TimeError, fixtures};
    use crate::filter::ExclusionReason;
    use chrono::{TimeZone, Utc};

    const ROUTE: &str =
        r#"[[0, 1, {"lat": 50.1, "lon": 8.6}], [1, "2", {"lat": 49.4, "lon": 11.0}]]"#;

    fn routed(dep: &str, arr: &str) -> Journey {
        let mut journey = fixtures::journey(dep, arr);
        journey.route = Some(ROUTE.into());
        journey
    }

    #[test]
    fn included_journey_is_decoded() {
        let processed = process_journey(&routed("A", "B"), &FilterConfig::default()).unwrap();

        assert_eq!(processed.inclusion, Inclusion::Included);
        let times = processed.times.unwrap();
        assert_eq!(times.departure, Utc.timestamp_opt(1_710_000_000, 0).unwrap());
        assert_eq!(times.arrival, Utc.timestamp_opt(1_710_007_200, 0).unwrap());

        let trajectory = processed.drawable().unwrap();
        assert_eq!(trajectory.kind(), TrajectoryKind::Beeline);
        assert_eq!(trajectory.waypoints().len(), 2);
    }

    #[test]
    fn station_excluded_journey_skips_parsing() {
        let mut journey = routed("Köln Hbf", "B");
        journey.real_dep_ts = "garbage".into();
        journey.route = Some("[[".into());
        let config = FilterConfig::new().with_excluded_stations(vec!["Köln".into()]);

        let processed = process_journey(&journey, &config).unwrap();
        assert_eq!(
            processed.inclusion,
            Inclusion::Excluded(ExclusionReason::Station("Köln".into()))
        );
        assert!(processed.times.is_none());
        assert!(processed.trajectory.is_none());
        assert!(processed.drawable().is_none());
    }

    #[test]
    fn date_excluded_journey_is_still_decoded() {
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let config = FilterConfig::new().with_start(Some(start));
        let processed = process_journey(&routed("A", "B"), &config).unwrap();

        assert_eq!(
            processed.inclusion,
            Inclusion::Excluded(ExclusionReason::BeforeStart)
        );
        assert!(processed.trajectory.is_some());
        assert!(processed.drawable().is_none());
    }

    #[test]
    fn date_window_bounds_are_strict() {
        let arrival = Utc.timestamp_opt(1_710_007_200, 0).unwrap();
        let departure = Utc.timestamp_opt(1_710_000_000, 0).unwrap();
        let second = chrono::Duration::seconds(1);
        let run = |config: FilterConfig| process_journey(&routed("A", "B"), &config).unwrap();

        assert!(run(FilterConfig::new().with_start(Some(arrival))).inclusion.is_included());
        assert_eq!(
            run(FilterConfig::new().with_start(Some(arrival + second))).inclusion,
            Inclusion::Excluded(ExclusionReason::BeforeStart)
        );
        assert!(run(FilterConfig::new().with_end(Some(departure))).inclusion.is_included());
        assert_eq!(
            run(FilterConfig::new().with_end(Some(departure - second))).inclusion,
            Inclusion::Excluded(ExclusionReason::AfterEnd)
        );
    }

    #[test]
    fn station_exclusion_wins_over_matching_window() {
        let config = FilterConfig::new()
            .with_start(Some(Utc.timestamp_opt(0, 0).unwrap()))
            .with_excluded_stations(vec!["B".into()]);

        let processed = process_journey(&routed("A", "B"), &config).unwrap();
        assert_eq!(
            processed.inclusion,
            Inclusion::Excluded(ExclusionReason::Station("B".into()))
        );
    }

    #[test]
    fn date_excluded_journey_still_reports_decode_errors() {
        let mut journey = routed("A", "B");
        journey.route = Some("{".into());
        let end = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let config = FilterConfig::new().with_end(Some(end));

        let err = process_journey(&journey, &config).unwrap_err();
        assert!(matches!(err, ProcessError::Decode { .. }));
    }

    #[test]
    fn bad_departure_time() {
        let mut journey = routed("Mainz Hbf", "Bingen");
        journey.real_dep_ts = "soon".into();

        let err = process_journey(&journey, &FilterConfig::default()).unwrap_err();
        match err {
            ProcessError::TimeParse { journey, field, source } => {
                assert_eq!(journey.from, "Mainz Hbf");
                assert_eq!(journey.to, "Bingen");
                assert_eq!(field, TimestampField::Departure);
                assert!(matches!(source, TimeError::NotNumeric(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_arrival_time() {
        let mut journey = routed("A", "B");
        journey.real_arr_ts = "".into();

        let err = process_journey(&journey, &FilterConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::TimeParse {
                field: TimestampField::Arrival,
                ..
            }
        ));
    }

    #[test]
    fn missing_geometry_is_an_error() {
        let journey = fixtures::journey("A", "B");
        let err = process_journey(&journey, &FilterConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Decode {
                source: DecodeError::NoGeometry,
                ..
            }
        ));
        assert_eq!(err.journey().from, "A");
    }

    #[test]
    fn batch_stops_at_first_error() {
        let mut bad = routed("Bad", "Worse");
        bad.polyline = Some(r#"[[8.6, 50.1, "x"]]"#.into());
        let journeys = vec![routed("A", "B"), bad, routed("C", "D")];

        let err = process_journeys(&journeys, &FilterConfig::default()).unwrap_err();
        assert_eq!(err.journey().from, "Bad");
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let journeys = vec![routed("A", "B"), routed("Skip me", "C"), routed("D", "E")];
        let config = FilterConfig::new().with_excluded_stations(vec!["Skip".into()]);

        let processed = process_journeys(&journeys, &config).unwrap();
        assert_eq!(processed.len(), 3);
        assert!(processed[0].inclusion.is_included());
        assert!(processed[1].inclusion.is_excluded());
        assert!(processed[2].inclusion.is_included());
    }

    #[test]
    fn summary_counts() {
        let mut exact = routed("A", "B");
        exact.polyline = Some("[[8.6, 50.1, 1]]".into());
        let journeys = vec![exact, routed("C", "D"), routed("Skip", "E")];
        let config = FilterConfig::new().with_excluded_stations(vec!["Skip".into()]);

        let processed = process_journeys(&journeys, &config).unwrap();
        assert_eq!(
            ProcessSummary::of(&processed),
            ProcessSummary {
                total: 3,
                included: 2,
                excluded: 1,
                exact: 1,
                beeline: 1,
            }
        );
    }

    #[test]
    fn dual_encoded_route_codes_resolve() {
        let processed = process_journey(&routed("A", "B"), &FilterConfig::default()).unwrap();
        let codes: Vec<_> = processed
            .trajectory
            .unwrap()
            .waypoints()
            .iter()
            .map(|p| p.eva)
            .collect();
        assert_eq!(codes, vec![Some(EvaCode::new(1)), Some(EvaCode::new(2))]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let journeys: Vec<_> = (0..64)
            .map(|i| {
                let mut journey = routed(&format!("S{i}"), &format!("T{i}"));
                if i % 3 == 0 {
                    journey.polyline = Some(format!("[[8.{i}, 50.{i}, 1]]"));
                }
                journey
            })
            .collect();
        let config = FilterConfig::new().with_excluded_stations(vec!["S1".into()]);

        let sequential = process_journeys(&journeys, &config).unwrap();
        let parallel = process_journeys_parallel(&journeys, &config).unwrap();
        assert_eq!(sequential, parallel);
    }
}
