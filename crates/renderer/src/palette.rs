//! 256-entry color palettes.
//!
//! Grey is an exact ramp. The other built-ins are sampled from nine evenly
//! spaced anchor colors of the matplotlib maps of the same name and linearly
//! interpolated in between, so entries between anchors may differ from the
//! reference 256-entry tables by a few units per channel. Use a palette file
//! when the exact reference colors are needed.

use crate::error::{RenderError, RenderResult};
use crate::gradient::{interpolate_color, Color};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 256;

const GREY_ANCHORS: [Color; 2] = [Color::new(0x00, 0x00, 0x00), Color::new(0xff, 0xff, 0xff)];

const PLASMA_ANCHORS: [Color; 9] = [
    Color::new(0x0d, 0x08, 0x87),
    Color::new(0x4c, 0x02, 0xa1),
    Color::new(0x7e, 0x03, 0xa8),
    Color::new(0xa9, 0x23, 0x95),
    Color::new(0xcc, 0x47, 0x78),
    Color::new(0xe5, 0x6b, 0x5d),
    Color::new(0xf8, 0x94, 0x41),
    Color::new(0xfd, 0xc3, 0x28),
    Color::new(0xf0, 0xf9, 0x21),
];

const MAGMA_ANCHORS: [Color; 9] = [
    Color::new(0x00, 0x00, 0x04),
    Color::new(0x1c, 0x10, 0x44),
    Color::new(0x4f, 0x12, 0x7b),
    Color::new(0x81, 0x25, 0x81),
    Color::new(0xb5, 0x36, 0x7a),
    Color::new(0xe5, 0x50, 0x64),
    Color::new(0xfb, 0x87, 0x61),
    Color::new(0xfe, 0xc2, 0x87),
    Color::new(0xfc, 0xfd, 0xbf),
];

const INFERNO_ANCHORS: [Color; 9] = [
    Color::new(0x00, 0x00, 0x04),
    Color::new(0x1f, 0x0c, 0x48),
    Color::new(0x55, 0x0f, 0x6d),
    Color::new(0x88, 0x22, 0x6a),
    Color::new(0xba, 0x36, 0x55),
    Color::new(0xe3, 0x59, 0x33),
    Color::new(0xf9, 0x8e, 0x09),
    Color::new(0xf9, 0xcb, 0x35),
    Color::new(0xfc, 0xff, 0xa4),
];

const VIRIDIS_ANCHORS: [Color; 9] = [
    Color::new(0x44, 0x01, 0x54),
    Color::new(0x47, 0x2d, 0x7b),
    Color::new(0x3b, 0x52, 0x8b),
    Color::new(0x2c, 0x72, 0x8e),
    Color::new(0x21, 0x91, 0x8c),
    Color::new(0x28, 0xae, 0x80),
    Color::new(0x5e, 0xc9, 0x62),
    Color::new(0xad, 0xdc, 0x30),
    Color::new(0xfd, 0xe7, 0x25),
];

/// A table of exactly [`PALETTE_SIZE`] colors indexed by `u8`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    colors: Vec<Color>,
}

impl Palette {
    /// Wrap a complete color table.
    pub fn from_colors(name: impl Into<String>, colors: Vec<Color>) -> RenderResult<Self> {
        if colors.len() != PALETTE_SIZE {
            return Err(RenderError::InvalidPalette(format!(
                "expected {} colors, got {}",
                PALETTE_SIZE,
                colors.len()
            )));
        }
        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// Sample a palette from color stops.
    ///
    /// Stops are `(position, color)` pairs in ascending position order. The
    /// first stop becomes index 0, the last index 255, and the entries in
    /// between are interpolated linearly.
    pub fn from_stops(name: impl Into<String>, stops: &[(f32, Color)]) -> RenderResult<Self> {
        if stops.len() < 2 {
            return Err(RenderError::InvalidPalette(
                "at least two color stops are required".to_string(),
            ));
        }
        if stops.iter().any(|(value, _)| !value.is_finite()) {
            return Err(RenderError::InvalidPalette(
                "color stop values must be finite".to_string(),
            ));
        }
        if stops.windows(2).any(|pair| pair[1].0 < pair[0].0) {
            return Err(RenderError::InvalidPalette(
                "color stops must be in ascending order".to_string(),
            ));
        }

        let first = stops[0].0;
        let last = stops[stops.len() - 1].0;
        if last <= first {
            return Err(RenderError::InvalidPalette(
                "color stops must span a non-empty range".to_string(),
            ));
        }

        let step = (last - first) / (PALETTE_SIZE - 1) as f32;
        let colors = (0..PALETTE_SIZE)
            .map(|i| color_at(stops, first + step * i as f32))
            .collect();

        Self::from_colors(name, colors)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn color(&self, index: u8) -> Color {
        self.colors[usize::from(index)]
    }

    /// RGB bytes for a palette index.
    pub fn rgb(&self, index: u8) -> [u8; 3] {
        self.color(index).to_array()
    }
}

/// Color of the stop segment containing `value`.
fn color_at(stops: &[(f32, Color)], value: f32) -> Color {
    for pair in stops.windows(2) {
        let (v0, c0) = pair[0];
        let (v1, c1) = pair[1];
        if value <= v1 {
            if v1 <= v0 {
                return c1;
            }
            return interpolate_color(c0, c1, (value - v0) / (v1 - v0));
        }
    }
    stops[stops.len() - 1].1
}

/// Palettes shipped with the renderer, selectable by index or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinPalette {
    Grey,
    #[default]
    Plasma,
    Magma,
    Inferno,
    Viridis,
}

impl BuiltinPalette {
    /// All built-in palettes, in index order.
    pub const ALL: [BuiltinPalette; 5] = [
        BuiltinPalette::Grey,
        BuiltinPalette::Plasma,
        BuiltinPalette::Magma,
        BuiltinPalette::Inferno,
        BuiltinPalette::Viridis,
    ];

    /// Look up a palette by its numeric selector.
    pub fn from_index(index: i64) -> RenderResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(RenderError::InvalidPaletteIndex {
                index,
                max: Self::ALL.len() - 1,
            })
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinPalette::Grey => "grey",
            BuiltinPalette::Plasma => "plasma",
            BuiltinPalette::Magma => "magma",
            BuiltinPalette::Inferno => "inferno",
            BuiltinPalette::Viridis => "viridis",
        }
    }

    fn anchors(self) -> &'static [Color] {
        match self {
            BuiltinPalette::Grey => &GREY_ANCHORS,
            BuiltinPalette::Plasma => &PLASMA_ANCHORS,
            BuiltinPalette::Magma => &MAGMA_ANCHORS,
            BuiltinPalette::Inferno => &INFERNO_ANCHORS,
            BuiltinPalette::Viridis => &VIRIDIS_ANCHORS,
        }
    }

    /// Build the 256-entry color table.
    pub fn palette(self) -> Palette {
        let anchors = self.anchors();
        let step = (anchors.len() - 1) as f32 / (PALETTE_SIZE - 1) as f32;
        let colors = (0..PALETTE_SIZE)
            .map(|i| {
                let position = i as f32 * step;
                let low = (position.floor() as usize).min(anchors.len() - 2);
                interpolate_color(anchors[low], anchors[low + 1], position - low as f32)
            })
            .collect();

        Palette {
            name: self.name().to_string(),
            colors,
        }
    }
}

impl fmt::Display for BuiltinPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinPalette {
    type Err = RenderError;

    /// Accepts a numeric selector (`"3"`) or a name (`"inferno"`, `"gray"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i64>() {
            return Self::from_index(index);
        }
        match s.to_ascii_lowercase().as_str() {
            "grey" | "gray" => Ok(BuiltinPalette::Grey),
            "plasma" => Ok(BuiltinPalette::Plasma),
            "magma" => Ok(BuiltinPalette::Magma),
            "inferno" => Ok(BuiltinPalette::Inferno),
            "viridis" => Ok(BuiltinPalette::Viridis),
            _ => Err(RenderError::UnknownPalette(s.to_string())),
        }
    }
}
