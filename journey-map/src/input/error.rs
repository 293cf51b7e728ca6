//! Input loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading input files or options.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading a file failed
    #[error("error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The data file is not a valid export
    #[error("error parsing {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A date option is not `YYYY-MM-DD`
    #[error("invalid date {value:?}: {source}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },

    /// A date option parses, but is not written as zero-padded `YYYY-MM-DD`
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    DateFormat { value: String },
}
