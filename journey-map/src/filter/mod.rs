//! Journey filtering.
//!
//! Journeys are never removed from the collection. Each one gets an
//! [`Inclusion`] decision computed from the record, its normalized times and
//! the [`FilterConfig`], so indices stay stable for diagnostics.

mod config;
mod inclusion;

pub use config::FilterConfig;
pub use inclusion::{ExclusionReason, Inclusion, date_exclusion, decide, station_exclusion};
