//! Binary PPM (P6) encoding for RGB image data.
//!
//! The format is an ASCII header `P6\n<width> <height>\n255\n` followed by
//! `width * height` RGB triples, row-major, top to bottom.

use crate::error::{RenderError, RenderResult};
use std::io::Write;

/// Maximum channel value written in the header.
pub const PPM_MAX_VALUE: u8 = 255;

/// Header for an 8-bit binary pixmap.
pub fn ppm_header(width: usize, height: usize) -> String {
    format!("P6\n{} {}\n{}\n", width, height, PPM_MAX_VALUE)
}

fn check_dimensions(pixels: &[u8], width: usize, height: usize) -> RenderResult<()> {
    let expected = width * height * 3;
    if pixels.len() != expected {
        return Err(RenderError::DimensionMismatch {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Write a PPM image to a byte sink.
///
/// # Arguments
/// - `writer`: Destination stream
/// - `pixels`: RGB pixel data (3 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn write_ppm<W: Write + ?Sized>(
    writer: &mut W,
    pixels: &[u8],
    width: usize,
    height: usize,
) -> RenderResult<()> {
    check_dimensions(pixels, width, height)?;
    writer.write_all(ppm_header(width, height).as_bytes())?;
    writer.write_all(pixels)?;
    writer.flush()?;
    Ok(())
}

/// Create a PPM image in memory from RGB pixel data.
pub fn create_ppm(pixels: &[u8], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    let header = ppm_header(width, height);
    let mut ppm = Vec::with_capacity(header.len() + pixels.len());
    write_ppm(&mut ppm, pixels, width, height)?;
    Ok(ppm)
}
