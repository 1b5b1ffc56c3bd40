//! Grid traversal and raster assembly.
//!
//! Walks every grid position in acquisition order, reduces its samples,
//! writes the result to the cells given by [`ScanGeometry::placement`] and
//! keeps the running value range for later normalization.

use crate::raster::Raster;
use crate::reducer::reduce_samples;
use crate::source::SampleSource;
use scan_common::{GridPosition, RunningExtremes, ScanGeometry, ScanResult};
use tracing::{debug, info, warn};

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Counters collected while assembling a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Positions whose samples were read and reduced
    pub positions_read: usize,
    /// Positions skipped because of a read or reduction failure
    pub positions_skipped: usize,
    /// Positions whose value was duplicated into a neighbouring column
    pub positions_edge_filled: usize,
    /// Total bytes of sample data read
    pub bytes_read: u64,
}

impl ScanStats {
    pub fn megabytes_read(&self) -> f64 {
        self.bytes_read as f64 / BYTES_PER_MEGABYTE
    }
}

/// Result of a completed traversal.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub geometry: ScanGeometry,
    pub raster: Raster,
    /// Frozen range of every reduced value
    pub extremes: RunningExtremes,
    pub stats: ScanStats,
}

/// Owns the raster and accumulators for one scan.
#[derive(Debug)]
pub struct ScanAssembler {
    geometry: ScanGeometry,
    raster: Raster,
    extremes: RunningExtremes,
    stats: ScanStats,
}

impl ScanAssembler {
    pub fn new(geometry: ScanGeometry) -> Self {
        Self {
            raster: Raster::for_geometry(&geometry),
            geometry,
            extremes: RunningExtremes::new(),
            stats: ScanStats::default(),
        }
    }

    pub fn geometry(&self) -> &ScanGeometry {
        &self.geometry
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn extremes(&self) -> RunningExtremes {
        self.extremes
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Read and reduce the samples of one position.
    fn reduce_position<S: SampleSource + ?Sized>(
        &mut self,
        source: &mut S,
        pos: GridPosition,
    ) -> ScanResult<f32> {
        let sequence = source.read_samples(pos)?;
        self.stats.bytes_read += sequence.bytes_read;
        reduce_samples(&sequence.samples)
    }

    /// Process one grid position.
    ///
    /// Returns the reduced value, or `None` if the position was skipped. A
    /// skipped position leaves the raster and the value range untouched.
    pub fn process_position<S: SampleSource + ?Sized>(
        &mut self,
        source: &mut S,
        pos: GridPosition,
    ) -> Option<f32> {
        debug!(x = pos.x, y = pos.y, "Processing position");

        match self.reduce_position(source, pos) {
            Ok(value) => {
                self.place(pos, value);
                Some(value)
            }
            Err(e) => {
                warn!(x = pos.x, y = pos.y, error = %e, "Skipping position");
                self.stats.positions_skipped += 1;
                None
            }
        }
    }

    /// Write a reduced value to its target cells and fold it into the range.
    pub fn place(&mut self, pos: GridPosition, value: f32) {
        let placement = self.geometry.placement(pos);
        for cell in placement.cells() {
            self.raster.set(cell, value);
        }
        if placement.is_edge_filled() {
            self.stats.positions_edge_filled += 1;
        }
        self.extremes.observe(value);
        self.stats.positions_read += 1;
    }

    /// Traverse the whole grid in acquisition order.
    ///
    /// Progress is logged once per column at `info`; each position is
    /// logged at `debug`.
    pub fn run<S: SampleSource + ?Sized>(mut self, source: &mut S) -> ScanOutcome {
        info!(
            width = self.geometry.width,
            height = self.geometry.height,
            shift = self.geometry.shift,
            "Assembling scan"
        );

        for pos in self.geometry.positions() {
            if pos.y == 0 {
                info!(
                    x = pos.x,
                    width = self.geometry.width,
                    "Scanning column {}/{}",
                    pos.x + 1,
                    self.geometry.width
                );
            }
            self.process_position(source, pos);
        }

        self.finish()
    }

    /// Stop accumulating and hand out the raster and frozen range.
    pub fn finish(self) -> ScanOutcome {
        info!(
            min = self.extremes.min,
            max = self.extremes.max,
            positions_read = self.stats.positions_read,
            positions_skipped = self.stats.positions_skipped,
            "Seen range from {:.3} .. {:.3}. Processed {:.2} Mbytes",
            self.extremes.min,
            self.extremes.max,
            self.stats.megabytes_read()
        );

        ScanOutcome {
            geometry: self.geometry,
            raster: self.raster,
            extremes: self.extremes,
            stats: self.stats,
        }
    }
}

/// Assemble a full scan from a sample source.
pub fn assemble_scan<S: SampleSource + ?Sized>(
    geometry: ScanGeometry,
    source: &mut S,
) -> ScanOutcome {
    ScanAssembler::new(geometry).run(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    #[test]
    fn test_place_updates_range_and_stats() {
        let geometry = ScanGeometry::new(2, 2, 1).unwrap();
        let mut assembler = ScanAssembler::new(geometry);

        assembler.place(GridPosition::new(1, 1), 4.0);
        assembler.place(GridPosition::new(1, 0), 2.0);

        assert_eq!(assembler.extremes(), RunningExtremes::from_bounds(2.0, 4.0));
        assert_eq!(assembler.stats().positions_read, 2);
        // (1, 0) lands in the bottom band but image column 0 has no left neighbour
        assert_eq!(assembler.stats().positions_edge_filled, 0);
    }

    #[test]
    fn test_skipped_position_counts() {
        let geometry = ScanGeometry::new(1, 2, 0).unwrap();
        let mut source = MemorySource::new().with(0, 0, vec![3.0]);

        let outcome = assemble_scan(geometry, &mut source);
        assert_eq!(outcome.stats.positions_read, 1);
        assert_eq!(outcome.stats.positions_skipped, 1);
        assert_eq!(outcome.stats.bytes_read, 4);
    }
}
