//! Heap-allocated raster of placed values.

use scan_common::{RasterCell, ScanGeometry};

/// Row-major `f32` raster, allocated once at a fixed size.
///
/// Cells start at `0.0`; cells that never receive a value keep it.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Raster sized for the image of a scan (`height + shift` rows).
    pub fn for_geometry(geometry: &ScanGeometry) -> Self {
        Self::new(geometry.image_width(), geometry.image_height())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, cell: RasterCell) -> Option<usize> {
        (cell.row < self.height && cell.col < self.width).then(|| cell.row * self.width + cell.col)
    }

    pub fn get(&self, cell: RasterCell) -> Option<f32> {
        self.index(cell).map(|i| self.values[i])
    }

    /// Store a value. Returns `false` if the cell is outside the raster.
    pub fn set(&mut self, cell: RasterCell, value: f32) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// One image row.
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.width;
        &self.values[start..start + self.width]
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_raster_is_zeroed() {
        let raster = Raster::new(3, 2);
        assert_eq!(raster.values(), &[0.0; 6]);
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
    }

    #[test]
    fn test_set_and_get() {
        let mut raster = Raster::new(3, 2);
        assert!(raster.set(RasterCell::new(1, 2), 7.5));
        assert_eq!(raster.get(RasterCell::new(1, 2)), Some(7.5));
        assert_eq!(raster.row(1), &[0.0, 0.0, 7.5]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut raster = Raster::new(3, 2);
        assert!(!raster.set(RasterCell::new(2, 0), 1.0));
        assert!(!raster.set(RasterCell::new(0, 3), 1.0));
        assert_eq!(raster.get(RasterCell::new(0, 3)), None);
        assert!(raster.values().iter().all(|&v| v == 0.0));
    }
}
