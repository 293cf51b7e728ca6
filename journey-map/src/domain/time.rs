//! Journey timestamp handling.
//!
//! The export stores real departure and arrival times as text holding a
//! (possibly fractional) number of seconds since the Unix epoch. This module
//! turns those into UTC instants, truncated to whole seconds.

use chrono::{DateTime, Utc};

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The text is not a decimal number.
    #[error("not a number: {0}")]
    NotNumeric(#[from] std::num::ParseFloatError),

    /// The number is NaN or infinite.
    #[error("not a finite number")]
    NotFinite,

    /// The number is outside the representable range of instants.
    #[error("timestamp {0} out of range")]
    OutOfRange(i64),
}

/// Parse a raw epoch-seconds timestamp into a UTC instant.
///
/// # Examples
///
/// ```
/// use journey_map::domain::parse_timestamp;
///
/// let t = parse_timestamp("1700000000").unwrap();
/// assert_eq!(t.timestamp(), 1_700_000_000);
///
/// // Fractions are truncated
/// assert_eq!(parse_timestamp("1700000000.9").unwrap().timestamp(), 1_700_000_000);
///
/// assert!(parse_timestamp("yesterday").is_err());
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimeError> {
    let secs: f64 = raw.parse()?;
    if !secs.is_finite() {
        return Err(TimeError::NotFinite);
    }

    let secs = secs.trunc() as i64;
    DateTime::from_timestamp(secs, 0).ok_or(TimeError::OutOfRange(secs))
}

/// Which of a journey's two timestamps is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
    Departure,
    Arrival,
}

impl std::fmt::Display for TimestampField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampField::Departure => f.write_str("real dep. time"),
            TimestampField::Arrival => f.write_str("real arr. time"),
        }
    }
}

/// Normalized real departure and arrival instants of a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyTimes {
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
}

impl JourneyTimes {
    pub fn new(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> Self {
        Self { departure, arrival }
    }
}
