//! Raw geometry payload shapes.
//!
//! These types map directly to the JSON stored in a journey's `polyline` and
//! `route` text fields. Entries of both are heterogeneous arrays, so they are
//! kept as loose JSON values and interpreted entry by entry.

/// A traced polyline: `[[lon, lat], [lon, lat, eva], ...]`.
pub type RawPolyline = Vec<Vec<serde_json::Value>>;

/// A stop-level route: `[[ordinal, eva, {"lat": .., "lon": .., ...}], ...]`.
pub type RawRoute = Vec<Vec<serde_json::Value>>;
