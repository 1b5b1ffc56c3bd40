//! Reduction of a sample sequence to one representative value.

use scan_common::{ScanError, ScanResult};

/// Lowest reading considered physically plausible.
pub const PLAUSIBLE_MIN: f32 = 0.0;

/// Highest reading considered physically plausible.
pub const PLAUSIBLE_MAX: f32 = 1000.0;

/// Whether a raw reading lies in the plausibility window. NaN never does.
#[inline]
pub fn looks_reasonable(value: f32) -> bool {
    (PLAUSIBLE_MIN..=PLAUSIBLE_MAX).contains(&value)
}

/// Mean of a sample sequence with implausible readings zeroed out.
///
/// Readings outside `[PLAUSIBLE_MIN, PLAUSIBLE_MAX]` are left out of the sum
/// but still count towards the divisor, so outliers pull the mean towards
/// zero rather than being ignored entirely.
///
/// An empty sequence has no mean and is reported as
/// [`ScanError::EmptySequence`].
pub fn reduce_samples(samples: &[f32]) -> ScanResult<f32> {
    if samples.is_empty() {
        return Err(ScanError::EmptySequence);
    }

    let sum: f64 = samples
        .iter()
        .copied()
        .filter(|&v| looks_reasonable(v))
        .map(f64::from)
        .sum();

    Ok((sum / samples.len() as f64) as f32)
}
