//! Error types for the renderer crate.

use thiserror::Error;

/// Errors that can occur while building palettes or encoding images.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid color map {index}; expected 0..={max}")]
    InvalidPaletteIndex { index: i64, max: usize },

    #[error("Unknown color map: {0}")]
    UnknownPalette(String),

    #[error("Invalid palette definition: {0}")]
    InvalidPalette(String),

    #[error("Failed to parse palette file: {0}")]
    PaletteParse(#[from] serde_json::Error),

    #[error("Pixel buffer has {actual} bytes, expected {expected} for {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
