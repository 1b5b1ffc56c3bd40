//! Sample data generators for synthetic scans.
//!
//! These generators create predictable, verifiable sample sequences that can
//! be used across the test suite.

/// Encodes a grid position as a plausible sample value.
///
/// The value is `x * 32 + y + 1`, which stays inside the plausibility window
/// for grids up to 31 columns by 32 rows and is never zero, so it can be told
/// apart from an unwritten raster cell.
///
/// # Example
///
/// ```
/// use test_utils::position_value;
///
/// assert_eq!(position_value(0, 0), 1.0);
/// assert_eq!(position_value(1, 2), 35.0);
/// ```
pub fn position_value(x: usize, y: usize) -> f32 {
    (x * 32 + y + 1) as f32
}

/// Creates a sequence of `count` identical samples.
pub fn constant_samples(value: f32, count: usize) -> Vec<f32> {
    vec![value; count]
}

/// Creates `count` copies of `value` followed by the given outliers.
pub fn samples_with_outliers(value: f32, count: usize, outliers: &[f32]) -> Vec<f32> {
    let mut samples = constant_samples(value, count);
    samples.extend_from_slice(outliers);
    samples
}

/// Creates deterministic noisy samples around `mean`.
///
/// Each sample deviates from `mean` by at most `amplitude`. Uses a simple
/// hash so the same seed always yields the same sequence.
pub fn noisy_samples(mean: f32, amplitude: f32, count: usize, seed: u32) -> Vec<f32> {
    (0..count)
        .map(|i| {
            let hash = simple_hash(i as u32, count as u32, seed);
            let unit = (hash % 2001) as f32 / 1000.0 - 1.0; // -1 to 1
            mean + unit * amplitude
        })
        .collect()
}

/// Serializes samples as native-endian `f32` bytes.
pub fn to_ne_bytes(samples: &[f32]) -> Vec<u8> {
    samples.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
