//! Drawing backends.
//!
//! A backend turns a [`RenderPlan`] into output. Rasterizing onto map tiles
//! is left to external tools; the backend shipped here writes a styled
//! GeoJSON `FeatureCollection` that such tools (or any GeoJSON viewer) can
//! consume directly.

use std::io::Write;

use serde_json::{Value, json};
use tracing::info;

use super::request::RenderPlan;
use super::theme::Theme;

/// Line width of trajectories, in pixels.
pub const PATH_WIDTH: f64 = 2.0;

/// Radius of station markers, in metres.
pub const STATION_RADIUS_M: f64 = 3000.0;

/// Suffix appended to the tile attribution.
const RENDERED_BY: &str = "rendered using journey-map";

/// How to style a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStyle {
    pub theme: Theme,
    pub hide_attribution: bool,
}

impl RenderStyle {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            hide_attribution: false,
        }
    }

    pub fn with_hide_attribution(mut self, hide: bool) -> Self {
        self.hide_attribution = hide;
        self
    }

    /// The attribution string, or `None` when hidden.
    pub fn attribution(&self) -> Option<String> {
        if self.hide_attribution {
            None
        } else {
            Some(format!("{}, {RENDERED_BY}", self.theme.tile_attribution()))
        }
    }
}

/// Something that can draw a render plan.
pub trait RenderBackend {
    type Error;

    fn render(&mut self, plan: &RenderPlan, style: &RenderStyle) -> Result<(), Self::Error>;
}

/// Errors from the GeoJSON backend.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("error serializing GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error writing output: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a plan as a GeoJSON `FeatureCollection`.
#[derive(Debug)]
pub struct GeoJsonBackend<W> {
    writer: W,
}

impl<W: Write> GeoJsonBackend<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Build the GeoJSON document for a plan.
///
/// Coordinates are written `[lon, lat]` as GeoJSON requires. Theme and
/// attribution go into foreign members of the collection.
pub fn feature_collection(plan: &RenderPlan, style: &RenderStyle) -> Value {
    let theme = style.theme;

    let paths = plan.paths.iter().map(|path| {
        let color = theme.path_color(path.kind);
        let coordinates: Vec<[f64; 2]> = path.points.iter().map(|p| [p.lon, p.lat]).collect();
        json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "kind": path.kind.as_str(),
                "stroke": color.hex(),
                "stroke-opacity": color.opacity(),
                "stroke-width": PATH_WIDTH,
            },
        })
    });

    let station_color = theme.station_color();
    let stations = plan.stations.iter().map(|marker| {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [marker.position.lon, marker.position.lat],
            },
            "properties": {
                "kind": "station",
                "marker-color": station_color.hex(),
                "fill-opacity": station_color.opacity(),
                "radius_m": STATION_RADIUS_M,
            },
        })
    });

    let mut collection = json!({
        "type": "FeatureCollection",
        "theme": theme.name(),
        "tile_provider": theme.tile_provider(),
        "features": paths.chain(stations).collect::<Vec<_>>(),
    });

    if let Some(attribution) = style.attribution() {
        collection["attribution"] = Value::String(attribution);
    }

    collection
}

impl<W: Write> RenderBackend for GeoJsonBackend<W> {
    type Error = RenderError;

    fn render(&mut self, plan: &RenderPlan, style: &RenderStyle) -> Result<(), RenderError> {
        let collection = feature_collection(plan, style);
        serde_json::to_writer_pretty(&mut self.writer, &collection)?;
        writeln!(self.writer)?;
        self.writer.flush()?;

        info!(
            paths = plan.paths.len(),
            stations = plan.stations.len(),
            theme = %style.theme,
            "wrote GeoJSON"
        );
        Ok(())
    }
}
