//! Scan assembly for grid-scanning instruments.
//!
//! Reduces the sample file recorded at every grid position to a single value
//! and places it into a raster that undoes the scanner's serpentine motion:
//! - File pattern expansion
//! - Sample sources (files, memory)
//! - Plausibility-filtered reduction
//! - Serpentine placement with row-shift edge-fill

pub mod assembler;
pub mod pattern;
pub mod raster;
pub mod reducer;
pub mod source;

pub use assembler::{assemble_scan, ScanAssembler, ScanOutcome, ScanStats};
pub use pattern::FilePattern;
pub use raster::Raster;
pub use reducer::{looks_reasonable, reduce_samples, PLAUSIBLE_MAX, PLAUSIBLE_MIN};
pub use source::{MemorySource, PatternSource, SampleSequence, SampleSource, SAMPLE_WIDTH};
