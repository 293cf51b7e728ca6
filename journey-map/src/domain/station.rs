//! Station code types.

use std::fmt;

use serde::Deserialize;

/// Error returned when a value cannot be interpreted as an EVA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEva {
    /// A string value that does not hold a decimal integer.
    #[error("invalid EVA string {value:?}: {source}")]
    NotAnInteger {
        value: String,
        source: std::num::ParseIntError,
    },

    /// A value that is neither a string nor a number.
    #[error("EVA has unexpected type: {0}")]
    UnexpectedType(String),
}

/// An EVA station code.
///
/// EVA codes are the integer station identifiers used throughout the
/// travel-log export. Inside geometry payloads they show up either as
/// JSON numbers or as decimal strings; both forms resolve to the same
/// `EvaCode`.
///
/// # Examples
///
/// ```
/// use journey_map::domain::EvaCode;
///
/// let hbf = EvaCode::parse("8000105").unwrap();
/// assert_eq!(hbf, EvaCode::new(8000105));
///
/// // Signs are accepted, anything else is rejected
/// assert_eq!(EvaCode::parse("+42").unwrap().get(), 42);
/// assert!(EvaCode::parse("80 00105").is_err());
/// assert!(EvaCode::parse("").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct EvaCode(i64);

impl EvaCode {
    /// Wrap a raw integer code.
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    /// Parse an EVA code from its decimal string form.
    pub fn parse(s: &str) -> Result<Self, InvalidEva> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|source| InvalidEva::NotAnInteger {
                value: s.to_string(),
                source,
            })
    }

    /// Interpret a JSON value holding either a string or a number.
    ///
    /// Numbers with a fractional part are truncated toward zero.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidEva> {
        match value {
            serde_json::Value::String(s) => Self::parse(s),
            serde_json::Value::Number(n) => {
                if let Some(code) = n.as_i64() {
                    Ok(Self(code))
                } else if let Some(code) = n.as_f64() {
                    Ok(Self(code.trunc() as i64))
                } else {
                    Err(InvalidEva::UnexpectedType(n.to_string()))
                }
            }
            other => Err(InvalidEva::UnexpectedType(other.to_string())),
        }
    }

    /// Returns the raw integer code.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for EvaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eva({})", self.0)
    }
}

impl fmt::Display for EvaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EvaCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}
