//! Domain types for the journey map.
//!
//! These types represent recorded journeys and the normalized data derived
//! from them. Validated values (station codes, instants) are resolved once
//! at the edge, so downstream code never re-checks raw representations.

mod journey;
mod station;
mod time;
mod waypoint;

#[cfg(test)]
pub(crate) use journey::fixtures;
pub use journey::{Export, Journey, JourneyLabel};
pub use station::{EvaCode, InvalidEva};
pub use time::{JourneyTimes, TimeError, TimestampField, parse_timestamp};
pub use waypoint::{LatLon, Waypoint};
