//! Pipeline error types.
//!
//! Every error names the journey it came from. Any of them aborts the whole
//! batch: a map silently missing some journeys would misrepresent the data.

use crate::decode::DecodeError;
use crate::domain::{JourneyLabel, TimeError, TimestampField};

/// Errors from processing a collection of journeys.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// A raw timestamp is not a usable number
    #[error("{journey}: error parsing {field}: {source}")]
    TimeParse {
        journey: JourneyLabel,
        field: TimestampField,
        source: TimeError,
    },

    /// The geometry payload could not be decoded
    #[error("{journey}: {source}")]
    Decode {
        journey: JourneyLabel,
        source: DecodeError,
    },
}

impl ProcessError {
    /// The journey the error refers to.
    pub fn journey(&self) -> &JourneyLabel {
        match self {
            ProcessError::TimeParse { journey, .. } | ProcessError::Decode { journey, .. } => {
                journey
            }
        }
    }
}
