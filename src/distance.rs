//! DTW distance newtype wrapper.

use std::cmp::Ordering;
use std::fmt;

/// A non-negative accumulated DTW alignment cost.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DtwDistance(f64);

impl DtwDistance {
    /// Infinite distance: the terminal cell was unreachable (e.g. the
    /// search window never connected `(0, 0)` to the far corner).
    pub const INFINITY: Self = Self(f64::INFINITY);

    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return true unless this is the unreachable sentinel.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for DtwDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
