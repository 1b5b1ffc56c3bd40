//! Gradient rendering of assembled rasters.
//!
//! Raster values are scaled linearly between the frozen minimum and maximum
//! of the scan onto palette indices `0..=255`, then looked up in a palette.

use crate::palette::Palette;
use scan_common::RunningExtremes;

/// Highest palette index.
pub const MAX_INDEX: u8 = u8::MAX;

/// Color value in RGB format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Linear color interpolation
pub fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f32 * t_inv) + (color2.r as f32 * t)).round() as u8,
        ((color1.g as f32 * t_inv) + (color2.g as f32 * t)).round() as u8,
        ((color1.b as f32 * t_inv) + (color2.b as f32 * t)).round() as u8,
    )
}

/// Map a raster value to a palette index.
///
/// - Values below the minimum (cells of skipped positions) map to 0.
/// - A degenerate range (nothing read, or a single distinct value) maps
///   everything to 0.
/// - Otherwise `round((value - min) * 255 / (max - min))`, clamped.
pub fn palette_index(value: f32, extremes: &RunningExtremes) -> u8 {
    // Also catches NaN
    if !(value >= extremes.min) {
        return 0;
    }
    let Some(span) = extremes.span() else {
        return 0;
    };

    let scale = f64::from(MAX_INDEX) / f64::from(span);
    let scaled = (f64::from(value - extremes.min) * scale).round();
    scaled.clamp(0.0, f64::from(MAX_INDEX)) as u8
}

/// Normalize grid data to palette indices
///
/// # Arguments
/// - `data`: 2D grid of values (row-major order)
/// - `width`: Number of columns
/// - `height`: Number of rows
/// - `extremes`: Frozen value range used for scaling
///
/// # Returns
/// One palette index per cell; cells beyond the end of `data` get index 0
pub fn render_indices(
    data: &[f32],
    width: usize,
    height: usize,
    extremes: &RunningExtremes,
) -> Vec<u8> {
    let mut indices = vec![0u8; width * height];

    for (idx, &value) in data.iter().take(width * height).enumerate() {
        indices[idx] = palette_index(value, extremes);
    }

    indices
}

/// Render grid data as a false-color image
///
/// # Arguments
/// - `data`: 2D grid of values (row-major order)
/// - `width`: Number of columns
/// - `height`: Number of rows
/// - `extremes`: Frozen value range used for scaling
/// - `palette`: 256-entry color table
///
/// # Returns
/// RGB pixel data (3 bytes per pixel)
pub fn render_grid(
    data: &[f32],
    width: usize,
    height: usize,
    extremes: &RunningExtremes,
    palette: &Palette,
) -> Vec<u8> {
    let mut pixels = vec![0u8; width * height * 3];

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let value = data.get(idx).copied().unwrap_or(0.0);
            let rgb = palette.rgb(palette_index(value, extremes));

            let pixel_idx = idx * 3;
            pixels[pixel_idx..pixel_idx + 3].copy_from_slice(&rgb);
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_color_endpoints() {
        let a = Color::new(0, 100, 200);
        let b = Color::new(255, 0, 100);
        assert_eq!(interpolate_color(a, b, 0.0), a);
        assert_eq!(interpolate_color(a, b, 1.0), b);
        assert_eq!(interpolate_color(a, b, 2.0), b);
        assert_eq!(interpolate_color(a, b, 0.5), Color::new(128, 50, 150));
    }

    #[test]
    fn test_palette_index_nan() {
        let extremes = RunningExtremes::from_bounds(0.0, 1.0);
        assert_eq!(palette_index(f32::NAN, &extremes), 0);
    }
}
