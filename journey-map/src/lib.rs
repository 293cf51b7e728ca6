//! Journey map builder.
//!
//! Turns a travel-log export of train journeys into render requests: one
//! trimmed trajectory per journey plus markers for its departure and arrival
//! stations, filtered by date window and station name.

pub mod decode;
pub mod domain;
pub mod filter;
pub mod input;
pub mod pipeline;
pub mod render;
pub mod segment;
pub mod trajectory;
