//! Warping path types and cost-matrix backtracking.

use crate::cost::CostMatrix;

/// A single step in a warping path, mapping index `a` in the first sequence
/// to index `b` in the second.
///
/// Compared and hashed by value, so steps double as window membership keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WarpingStep {
    /// Index in the first sequence.
    pub a: usize,
    /// Index in the second sequence.
    pub b: usize,
}

/// An ordered staircase path of warping steps from `(0, 0)` to `(n-1, m-1)`:
/// both indices non-decreasing, each step advancing at most one index per
/// dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpingPath(Vec<WarpingStep>);

impl WarpingPath {
    pub(crate) fn new(steps: Vec<WarpingStep>) -> Self {
        Self(steps)
    }

    /// A path with no steps. Produced by the radius-0 coarse-path
    /// short-circuit, never by backtracking.
    pub(crate) fn empty() -> Self {
        Self(Vec::new())
    }

    /// Return the warping steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[WarpingStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a WarpingPath {
    type Item = &'a WarpingStep;
    type IntoIter = std::slice::Iter<'a, WarpingStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Recover the optimal alignment path from a gaplessly filled cost matrix.
///
/// Walks from the terminal cell back to `(0, 0)`, at each cell picking the
/// cheapest in-bounds predecessor. Candidates are examined in a fixed
/// precedence — up `(i-1, j)`, left `(i, j-1)`, diagonal `(i-1, j-1)` — with
/// strict comparison, so on exact cost ties the earlier candidate wins and
/// path recovery is deterministic. Returns the path in forward order.
pub(crate) fn backtrack(cost: &CostMatrix) -> WarpingPath {
    let mut i = cost.rows() - 1;
    let mut j = cost.cols() - 1;
    let mut steps = vec![WarpingStep { a: i, b: j }];

    while i > 0 || j > 0 {
        let mut best_i = i;
        let mut best_j = j;
        let mut best_cost = f64::INFINITY;

        if i > 0 && cost.get(i - 1, j) < best_cost {
            best_cost = cost.get(i - 1, j);
            best_i = i - 1;
            best_j = j;
        }
        if j > 0 && cost.get(i, j - 1) < best_cost {
            best_cost = cost.get(i, j - 1);
            best_i = i;
            best_j = j - 1;
        }
        if i > 0 && j > 0 && cost.get(i - 1, j - 1) < best_cost {
            best_i = i - 1;
            best_j = j - 1;
        }

        i = best_i;
        j = best_j;
        steps.push(WarpingStep { a: i, b: j });
    }

    steps.reverse();
    WarpingPath::new(steps)
}
