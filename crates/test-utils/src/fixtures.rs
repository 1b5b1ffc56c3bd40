//! Common test fixtures for scan imaging tests.
//!
//! This module provides on-disk sample directories and pre-defined scan
//! scenarios with hand-computed expectations.

use crate::generators::to_ne_bytes;
use std::path::{Path, PathBuf};

/// Empty scratch directory for test output, removed on drop.
pub fn scratch_dir() -> tempfile::TempDir {
    temp_dir_with_prefix("scan_scratch_")
}

fn temp_dir_with_prefix(prefix: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("Failed to create temporary test directory")
}

/// A temporary directory holding one sample file per grid position.
///
/// Files are named `pos_<x>_<y>.f32`; [`SampleDir::pattern`] returns the
/// matching filename pattern. The directory is removed on drop.
pub struct SampleDir {
    dir: tempfile::TempDir,
}

impl SampleDir {
    pub fn new() -> Self {
        Self {
            dir: temp_dir_with_prefix("scan_samples_"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Filename pattern with `%d` placeholders for x and y.
    pub fn pattern(&self) -> String {
        self.dir
            .path()
            .join("pos_%d_%d.f32")
            .to_string_lossy()
            .into_owned()
    }

    /// Path of the sample file for a position.
    pub fn file_for(&self, x: usize, y: usize) -> PathBuf {
        self.dir.path().join(format!("pos_{}_{}.f32", x, y))
    }

    /// Writes samples for a position as native-endian `f32`.
    pub fn write_samples(&self, x: usize, y: usize, samples: &[f32]) -> PathBuf {
        self.write_bytes(x, y, &to_ne_bytes(samples))
    }

    /// Writes raw bytes for a position (e.g. truncated files).
    pub fn write_bytes(&self, x: usize, y: usize, bytes: &[u8]) -> PathBuf {
        let path = self.file_for(x, y);
        std::fs::write(&path, bytes).expect("Failed to write sample file");
        path
    }

    /// Writes a file for every position of a `width x height` grid.
    pub fn populate<F>(&self, width: usize, height: usize, samples_for: F)
    where
        F: Fn(usize, usize) -> Vec<f32>,
    {
        for x in 0..width {
            for y in 0..height {
                self.write_samples(x, y, &samples_for(x, y));
            }
        }
    }
}

impl Default for SampleDir {
    fn default() -> Self {
        Self::new()
    }
}

/// The 2x2 scan with no row shift and one known sample per position.
pub mod two_by_two {
    pub const WIDTH: usize = 2;
    pub const HEIGHT: usize = 2;
    pub const SHIFT: usize = 0;

    /// `(x, y, value)` for every grid position.
    pub const SAMPLES: [(usize, usize, f32); 4] =
        [(0, 0, 10.0), (0, 1, 20.0), (1, 0, 30.0), (1, 1, 40.0)];

    /// Raster after mirroring columns and flipping the odd column, row-major.
    pub const EXPECTED_RASTER: [f32; 4] = [40.0, 10.0, 30.0, 20.0];

    /// Palette indices of [`EXPECTED_RASTER`] under min 10 / max 40.
    pub const EXPECTED_INDICES: [u8; 4] = [255, 0, 170, 85];
}
