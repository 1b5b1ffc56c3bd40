//! False-color rendering of assembled scan rasters.
//!
//! Implements:
//! - Linear normalization of raster values to palette indices
//! - Built-in and JSON-defined 256-entry palettes
//! - Binary PPM (P6) encoding

pub mod error;
pub mod gradient;
pub mod palette;
pub mod ppm;
pub mod style;

pub use error::{RenderError, RenderResult};
pub use gradient::{palette_index, render_grid, render_indices, Color};
pub use palette::{BuiltinPalette, Palette, PALETTE_SIZE};
pub use ppm::{create_ppm, ppm_header, write_ppm};
pub use style::PaletteDefinition;
