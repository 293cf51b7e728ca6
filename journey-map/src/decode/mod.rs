//! Geometry decoding.
//!
//! Journeys describe their path in one of two loosely-typed encodings:
//! - `polyline`: a traced track of `[lon, lat, eva?]` points (longitude first)
//! - `route`: one `[ordinal, eva, {lat, lon}]` entry per stop
//!
//! Station codes in either encoding may be numbers or decimal strings.

mod error;
mod geometry;
mod types;

pub use error::{DecodeError, GeometryField};
pub use geometry::{decode_geometry, decode_polyline, decode_route};
