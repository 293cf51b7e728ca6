//! Render request building and output.
//!
//! [`build_render_plan`] turns processed journeys into paths and station
//! markers. A [`RenderBackend`] draws the plan under a [`Theme`].

mod backend;
mod request;
mod theme;

pub use backend::{
    GeoJsonBackend, PATH_WIDTH, RenderBackend, RenderError, RenderStyle, STATION_RADIUS_M,
    feature_collection,
};
pub use request::{PathRequest, RenderPlan, StationMarker, build_render_plan};
pub use theme::{Rgba, Theme};
