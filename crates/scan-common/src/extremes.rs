//! Running minimum/maximum of reduced values.

use serde::{Deserialize, Serialize};

/// Observed value range over a scan.
///
/// Starts out inverted (`min = +inf`, `max = -inf`) so that the first
/// observation sets both bounds. A range that was never updated keeps
/// `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningExtremes {
    pub min: f32,
    pub max: f32,
}

impl Default for RunningExtremes {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningExtremes {
    pub fn new() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    /// Build a frozen range from known bounds.
    pub fn from_bounds(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Fold a value into the range. NaN is ignored.
    pub fn observe(&mut self, value: f32) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// True until at least one value has been observed.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Width of the range, or `None` when it is empty or a single point.
    pub fn span(&self) -> Option<f32> {
        let span = self.max - self.min;
        if span > 0.0 && span.is_finite() {
            Some(span)
        } else {
            None
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_range_is_empty() {
        let range = RunningExtremes::new();
        assert!(range.is_empty());
        assert_eq!(range.span(), None);
    }

    #[test]
    fn test_observe_updates_both_bounds() {
        let mut range = RunningExtremes::new();
        range.observe(5.0);
        assert_eq!(range.min, 5.0);
        assert_eq!(range.max, 5.0);
        assert!(!range.is_empty());
        assert_eq!(range.span(), None);

        range.observe(2.0);
        range.observe(9.0);
        assert_eq!(range.min, 2.0);
        assert_eq!(range.max, 9.0);
        assert_eq!(range.span(), Some(7.0));
    }

    #[test]
    fn test_observe_ignores_nan() {
        let mut range = RunningExtremes::new();
        range.observe(f32::NAN);
        assert!(range.is_empty());
    }
}
