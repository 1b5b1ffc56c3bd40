//! Scan grid geometry and placement of grid positions into image space.
//!
//! The scanner sweeps down one column, steps over, sweeps up the next, and
//! so on, moving right to left. Even and odd columns are offset vertically
//! by a mechanical `shift`, so the image is `shift` rows taller than the
//! scan. Rows where only one sweep direction has data are filled by
//! duplicating the value into the neighbouring column.

use crate::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};

/// Widest per-cell footprint of any buffer sized from a geometry
/// (`f32` raster cells; RGB pixels take three bytes).
const RASTER_CELL_BYTES: usize = 4;

/// Empirical row offset between even and odd sweeps.
pub const DEFAULT_ROW_SHIFT: usize = 10;

/// One scan location in the logical `width x height` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: usize,
    pub y: usize,
}

impl GridPosition {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Columns with even index are swept top to bottom.
    pub fn sweeps_down(&self) -> bool {
        self.x % 2 == 0
    }
}

/// A cell of the assembled raster, in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RasterCell {
    pub row: usize,
    pub col: usize,
}

impl RasterCell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Raster cells that receive the reduced value of one grid position.
///
/// Always has a primary cell. The edge-fill cell is present when the
/// position lies in a band covered by only one sweep direction and the
/// neighbouring column is inside the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub primary: RasterCell,
    pub edge_fill: Option<RasterCell>,
}

impl Placement {
    /// All target cells, primary first.
    pub fn cells(&self) -> impl Iterator<Item = RasterCell> {
        std::iter::once(self.primary).chain(self.edge_fill)
    }

    pub fn cell_count(&self) -> usize {
        1 + usize::from(self.edge_fill.is_some())
    }

    pub fn is_edge_filled(&self) -> bool {
        self.edge_fill.is_some()
    }
}

/// Dimensions of a scan and of the raster it is assembled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanGeometry {
    /// Number of scan columns
    pub width: usize,
    /// Number of samples per column sweep
    pub height: usize,
    /// Row offset between even and odd sweeps
    pub shift: usize,
}

impl ScanGeometry {
    /// Create a geometry, rejecting empty grids and rasters too large to
    /// allocate.
    pub fn new(width: usize, height: usize, shift: usize) -> ScanResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScanError::InvalidGeometry(format!(
                "grid must be at least 1x1, got {}x{}",
                width, height
            )));
        }

        let too_large = || {
            ScanError::InvalidGeometry(format!(
                "raster for {}x{} with shift {} is too large",
                width, height, shift
            ))
        };
        let image_height = height.checked_add(shift).ok_or_else(too_large)?;
        width
            .checked_mul(image_height)
            .and_then(|cells| cells.checked_mul(RASTER_CELL_BYTES))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(too_large)?;

        Ok(Self {
            width,
            height,
            shift,
        })
    }

    pub fn image_width(&self) -> usize {
        self.width
    }

    pub fn image_height(&self) -> usize {
        self.height + self.shift
    }

    /// Number of cells in the assembled raster.
    pub fn image_len(&self) -> usize {
        self.image_width() * self.image_height()
    }

    /// Total number of grid positions.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, pos: GridPosition) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Grid positions in acquisition order: columns ascending, rows
    /// ascending within each column.
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| GridPosition::new(x, y)))
    }

    /// Image cell of a grid position, before edge-fill.
    ///
    /// Columns are mirrored (the scan runs right to left) and odd columns are
    /// flipped vertically over the full image height.
    pub fn image_cell(&self, pos: GridPosition) -> RasterCell {
        let col = self.width - 1 - pos.x;
        let row = if pos.sweeps_down() {
            pos.y
        } else {
            self.image_height() - 1 - pos.y
        };
        RasterCell::new(row, col)
    }

    /// All raster cells that receive the value of `pos`.
    ///
    /// Even sweeps in the top `shift` rows also fill the column to their
    /// right; odd sweeps below row `height` also fill the column to their
    /// left. A neighbour outside the raster is dropped.
    pub fn placement(&self, pos: GridPosition) -> Placement {
        let primary = self.image_cell(pos);

        let edge_fill = if pos.sweeps_down() && pos.y < self.shift {
            Some(primary.col + 1).filter(|&col| col < self.width)
        } else if !pos.sweeps_down() && primary.row >= self.height {
            primary.col.checked_sub(1)
        } else {
            None
        };

        Placement {
            primary,
            edge_fill: edge_fill.map(|col| RasterCell::new(primary.row, col)),
        }
    }

    /// Flat row-major index of a raster cell.
    pub fn flat_index(&self, cell: RasterCell) -> usize {
        cell.row * self.image_width() + cell.col
    }
}
