//! Symmetric pairwise distance matrix for batch comparisons.

use crate::distance::DtwDistance;

/// Symmetric matrix of pairwise distances over `n` sequences, stored as a
/// lower-triangular flat vector of `n*(n-1)/2` entries.
///
/// Access is symmetric (`get(i, j) == get(j, i)`) and the diagonal is
/// always zero.
#[derive(Debug, Clone)]
pub struct PairwiseMatrix {
    n: usize,
    lower: Vec<DtwDistance>,
}

impl PairwiseMatrix {
    /// Build from pre-computed lower-triangular data laid out as
    /// `lower[row*(row-1)/2 + col]` for `row > col`.
    pub(crate) fn from_raw(n: usize, lower: Vec<DtwDistance>) -> Self {
        debug_assert_eq!(lower.len(), n * (n - 1) / 2);
        Self { n, lower }
    }

    /// Return the number of sequences covered by the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Return true if the matrix covers no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Return the distance between sequences `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()` or `j >= len()`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> DtwDistance {
        assert!(i < self.n, "index {i} out of bounds for {} sequences", self.n);
        assert!(j < self.n, "index {j} out of bounds for {} sequences", self.n);
        if i == j {
            return DtwDistance::new(0.0);
        }
        let (row, col) = if i > j { (i, j) } else { (j, i) };
        self.lower[row * (row - 1) / 2 + col]
    }

    /// Iterate over all unique pairs as `(i, j, distance)` with `i > j`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, DtwDistance)> + '_ {
        (1..self.n)
            .flat_map(move |i| (0..i).map(move |j| (i, j, self.lower[i * (i - 1) / 2 + j])))
    }

    /// Return the distances from sequence `i` to every sequence, including
    /// the zero self-distance at position `i`.
    #[must_use]
    pub fn row(&self, i: usize) -> Vec<DtwDistance> {
        (0..self.n).map(|j| self.get(i, j)).collect()
    }
}
