//! Map themes.
//!
//! A theme decides which base map to draw on and how trajectories and
//! stations are coloured. The pipeline only ever produces a
//! [`TrajectoryKind`]; colours are resolved here, at the backend boundary.

use std::fmt;

use crate::trajectory::TrajectoryKind;

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The colour without alpha, as `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `0.0..=1.0`, rounded to two decimals.
    pub fn opacity(&self) -> f64 {
        (f64::from(self.a) / 255.0 * 100.0).round() / 100.0
    }
}

const BEELINE: Rgba = Rgba::new(0x66, 0x55, 0x77, 153);

/// The closed set of available themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Pick a theme from a dark-mode switch.
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Identifier of the base map tile provider.
    pub fn tile_provider(&self) -> &'static str {
        match self {
            Theme::Light => "osm",
            Theme::Dark => "carto-dark",
        }
    }

    /// Attribution required by the tile provider.
    pub fn tile_attribution(&self) -> &'static str {
        match self {
            Theme::Light => "Maps and Data (c) openstreetmap.org and contributors, ODbL",
            Theme::Dark => "Map (c) Carto [CC BY 3.0] Data (c) OSM and contributors, ODbL.",
        }
    }

    /// Colour of a trajectory line.
    pub fn path_color(&self, kind: TrajectoryKind) -> Rgba {
        match (self, kind) {
            (_, TrajectoryKind::Beeline) => BEELINE,
            (Theme::Light, TrajectoryKind::Exact) => Rgba::new(0x67, 0x3a, 0xb7, 204),
            (Theme::Dark, TrajectoryKind::Exact) => Rgba::new(0x58, 0x30, 0x9f, 204),
        }
    }

    /// Colour of a station marker.
    pub fn station_color(&self) -> Rgba {
        match self {
            Theme::Light => Rgba::new(0xff, 0x00, 0x33, 102),
            Theme::Dark => Rgba::new(0xaa, 0x00, 0x22, 102),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
