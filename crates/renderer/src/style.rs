//! JSON palette definitions.
//!
//! A palette file lists color stops; the stops are stretched over the 256
//! palette entries, so only their relative positions matter:
//!
//! ```json
//! {
//!   "name": "heat",
//!   "description": "black through red to white",
//!   "stops": [
//!     {"value": 0, "color": "#000000"},
//!     {"value": 0.6, "color": "#FF0000", "label": "warm"},
//!     {"value": 1, "color": "#FFFFFF"}
//!   ]
//! }
//! ```

use crate::error::{RenderError, RenderResult};
use crate::gradient::Color;
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A palette loaded from JSON
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaletteDefinition {
    pub name: String,
    pub description: Option<String>,
    pub stops: Vec<ColorStop>,
}

/// Color stop for gradient
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorStop {
    pub value: f32,
    pub color: String,
    pub label: Option<String>,
}

impl PaletteDefinition {
    /// Load palette definition from JSON string
    pub fn from_json(json_str: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load palette definition from file
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading palette definition");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the 256-entry palette, sorting stops by value.
    pub fn to_palette(&self) -> RenderResult<Palette> {
        let mut stops = self
            .stops
            .iter()
            .map(|stop| {
                hex_to_rgb(&stop.color)
                    .map(|(r, g, b)| (stop.value, Color::new(r, g, b)))
                    .ok_or_else(|| {
                        RenderError::InvalidPalette(format!(
                            "bad color '{}' in palette '{}'",
                            stop.color, self.name
                        ))
                    })
            })
            .collect::<RenderResult<Vec<_>>>()?;
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));

        Palette::from_stops(self.name.clone(), &stops)
    }
}

/// Parse hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}
