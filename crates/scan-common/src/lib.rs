//! Common types shared across the scan imaging crates.

pub mod error;
pub mod extremes;
pub mod grid;

pub use error::{ScanError, ScanResult};
pub use extremes::RunningExtremes;
pub use grid::{GridPosition, Placement, RasterCell, ScanGeometry, DEFAULT_ROW_SHIFT};
