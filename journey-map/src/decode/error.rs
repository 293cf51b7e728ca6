//! Geometry decoding error types.

use std::fmt;

use crate::domain::InvalidEva;

/// Which raw geometry field a decoding error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryField {
    Polyline,
    Route,
}

impl fmt::Display for GeometryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryField::Polyline => f.write_str("polyline"),
            GeometryField::Route => f.write_str("route"),
        }
    }
}

/// Errors from decoding a journey's raw geometry.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Neither a polyline nor a route is present
    #[error("journey has neither polyline nor route")]
    NoGeometry,

    /// The payload is not JSON of the expected shape
    #[error("error parsing {field}: {source}")]
    Json {
        field: GeometryField,
        source: serde_json::Error,
    },

    /// A point lacks a usable coordinate
    #[error("{field} point {index}: {reason}")]
    MalformedPoint {
        field: GeometryField,
        index: usize,
        reason: &'static str,
    },

    /// A point's station code is neither a number nor an integer string
    #[error("{field} point {index}: {source}")]
    InvalidEva {
        field: GeometryField,
        index: usize,
        source: InvalidEva,
    },
}

impl DecodeError {
    /// The geometry field the error came from, if any.
    pub fn field(&self) -> Option<GeometryField> {
        match self {
            DecodeError::NoGeometry => None,
            DecodeError::Json { field, .. }
            | DecodeError::MalformedPoint { field, .. }
            | DecodeError::InvalidEva { field, .. } => Some(*field),
        }
    }
}
