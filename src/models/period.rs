//! Time interval model.
//!
//! All times are fractional hours relative to an epoch the caller defines
//! (e.g., the start of the planning week). The scheduling period itself is
//! an [`Interval`]; time-off records carry one as well.
//!
//! # Semantics
//! Intervals are half-open `[start, end)` for overlap arithmetic, so two
//! back-to-back intervals do not overlap.

use serde::{Deserialize, Serialize};

/// A time interval `[start_h, end_h)` in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Interval start (hours, inclusive).
    pub start_h: f64,
    /// Interval end (hours, exclusive).
    pub end_h: f64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start_h: f64, end_h: f64) -> Self {
        Self { start_h, end_h }
    }

    /// Duration of this interval in hours. Negative if inverted.
    #[inline]
    pub fn duration_h(&self) -> f64 {
        self.end_h - self.start_h
    }

    /// Whether start ≤ end.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start_h <= self.end_h
    }

    /// Whether two intervals overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_h < other.end_h && other.start_h < self.end_h
    }

    /// Overlap duration with another interval in hours (0.0 if disjoint).
    pub fn overlap_h(&self, other: &Self) -> f64 {
        let start = self.start_h.max(other.start_h);
        let end = self.end_h.min(other.end_h);
        (end - start).max(0.0)
    }

    /// Clips this interval to the bounds of another.
    ///
    /// Returns `None` if the intersection is empty.
    pub fn clip_to(&self, bounds: &Self) -> Option<Self> {
        let start = self.start_h.max(bounds.start_h);
        let end = self.end_h.min(bounds.end_h);
        if end > start {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_duration() {
        let i = Interval::new(8.0, 16.0);
        assert!((i.duration_h() - 8.0).abs() < 1e-10);
        assert!(i.is_well_formed());
    }

    #[test]
    fn test_inverted_interval() {
        let i = Interval::new(16.0, 8.0);
        assert!(!i.is_well_formed());
        assert!(i.duration_h() < 0.0);
    }

    #[test]
    fn test_overlap() {
        let a = Interval::new(0.0, 10.0);
        let b = Interval::new(5.0, 15.0);
        assert!(a.overlaps(&b));
        assert!((a.overlap_h(&b) - 5.0).abs() < 1e-10);

        // Touching endpoints do not overlap
        let c = Interval::new(10.0, 20.0);
        assert!(!a.overlaps(&c));
        assert!((a.overlap_h(&c) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_clip_to() {
        let period = Interval::new(0.0, 40.0);
        let inside = Interval::new(10.0, 20.0);
        assert_eq!(inside.clip_to(&period), Some(inside));

        let spilling = Interval::new(30.0, 50.0);
        assert_eq!(spilling.clip_to(&period), Some(Interval::new(30.0, 40.0)));

        let outside = Interval::new(45.0, 60.0);
        assert_eq!(outside.clip_to(&period), None);
    }
}
