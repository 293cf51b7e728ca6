//! File and option loading.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::domain::Export;

use super::error::InputError;

/// Load a travel-log export from a JSON file.
pub fn load_export(path: &Path) -> Result<Export, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let export: Export = serde_json::from_str(&contents).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), journeys = export.journeys.len(), "loaded export");
    Ok(export)
}

/// Parse station-name substrings, one per line.
///
/// Lines are trimmed; blank lines are skipped.
pub fn parse_exclude_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the station exclusion file, if one is given.
pub fn read_exclude_file(path: Option<&Path>) -> Result<Vec<String>, InputError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let stations = parse_exclude_list(&contents);
    debug!(path = %path.display(), count = stations.len(), "loaded excluded stations");
    Ok(stations)
}

/// Parse a `YYYY-MM-DD` date bound into midnight UTC of that day.
///
/// An absent or empty value means no bound.
///
/// # Examples
///
/// ```
/// use journey_map::input::parse_date;
///
/// let start = parse_date(Some("2024-03-15")).unwrap().unwrap();
/// assert_eq!(start.to_rfc3339(), "2024-03-15T00:00:00+00:00");
///
/// assert_eq!(parse_date(None).unwrap(), None);
/// assert_eq!(parse_date(Some("")).unwrap(), None);
/// assert!(parse_date(Some("15.03.2024")).is_err());
/// assert!(parse_date(Some("2024-3-15")).is_err());
/// ```
pub fn parse_date(value: Option<&str>) -> Result<Option<DateTime<Utc>>, InputError> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let date =
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| InputError::Date {
            value: value.to_string(),
            source,
        })?;
    if date.format("%Y-%m-%d").to_string() != value {
        return Err(InputError::DateFormat {
            value: value.to_string(),
        });
    }

    Ok(Some(date.and_time(chrono::NaiveTime::MIN).and_utc()))
}
