//! FastDTW: multiresolution approximate DTW.
//!
//! Coarsens both sequences by one level, recovers an alignment path at the
//! low resolution, projects it into a narrow full-resolution window, and
//! runs the DP recurrence only inside that window. The result is exact
//! whenever the window happens to contain the true optimal path; otherwise
//! it is an upper bound on the exact distance.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::cost::CostMatrix;
use crate::distance::DtwDistance;
use crate::dtw::{check_uniform_dims, Dtw};
use crate::error::DtwError;
use crate::matrix::PairwiseMatrix;
use crate::metric::{DistanceMetric, Euclidean};
use crate::path::{backtrack, WarpingPath};
use crate::reduce::reduce_by_half;
use crate::sequence::{check_dims, Sequence, SequenceView};
use crate::window::Window;

/// Approximate DTW aligner. Immutable configuration, thread-safe and
/// copyable.
///
/// `radius` controls the exact-fallback threshold (`radius + 2`); the
/// projected window itself is always one ring of neighbors wide. A radius
/// of 0 is accepted but short-circuits the coarse path to empty, which
/// leaves sequences above the fallback threshold with an
/// [`INFINITY`](DtwDistance::INFINITY) result.
#[derive(Debug, Clone, Copy)]
pub struct FastDtw<M: DistanceMetric = Euclidean> {
    radius: usize,
    metric: M,
}

impl FastDtw<Euclidean> {
    /// Create an approximate aligner with the built-in Euclidean metric.
    #[must_use]
    pub fn new(radius: usize) -> Self {
        Self {
            radius,
            metric: Euclidean,
        }
    }
}

impl<M: DistanceMetric> FastDtw<M> {
    /// Create an approximate aligner with a custom point metric.
    pub fn with_metric(radius: usize, metric: M) -> Self {
        Self { radius, metric }
    }

    /// Return the configured radius.
    #[must_use]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Compute the approximate DTW distance between two sequences.
    ///
    /// Sequences no longer than `radius + 2` points fall back to the exact
    /// aligner, so the result is then exact by construction.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::DimensionMismatch`] | `x` and `y` have different point dimensions |
    #[instrument(skip(self, x, y), fields(n = x.len(), m = y.len(), radius = self.radius))]
    pub fn distance(
        &self,
        x: SequenceView<'_>,
        y: SequenceView<'_>,
    ) -> Result<DtwDistance, DtwError> {
        check_dims(x, y)?;
        Ok(self.fast_distance(x, y))
    }

    /// Compute approximate DTW distances for all unique pairs in a
    /// collection, parallelized across pairs with rayon.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::DimensionMismatch`] | Any sequence's point dimension differs from the first's |
    #[instrument(skip(self, sequences), fields(n = sequences.len(), radius = self.radius))]
    pub fn pairwise(&self, sequences: &[Sequence]) -> Result<PairwiseMatrix, DtwError> {
        check_uniform_dims(sequences)?;

        let n = sequences.len();
        let total_pairs = n * (n - 1) / 2;
        let views: Vec<SequenceView<'_>> = sequences.iter().map(Sequence::as_view).collect();

        let distances: Vec<DtwDistance> = (0..total_pairs)
            .into_par_iter()
            .map(|flat_idx| {
                let i = ((1.0 + (1.0 + 8.0 * flat_idx as f64).sqrt()) / 2.0).floor() as usize;
                let j = flat_idx - i * (i - 1) / 2;
                self.fast_distance(views[i], views[j])
            })
            .collect();

        Ok(PairwiseMatrix::from_raw(n, distances))
    }

    /// The multiresolution pipeline. Dimensions must already be checked.
    fn fast_distance(&self, x: SequenceView<'_>, y: SequenceView<'_>) -> DtwDistance {
        let min_size = self.radius + 2;
        if x.len() <= min_size || y.len() <= min_size {
            debug!(min_size, "at or below fallback threshold, running exact DTW");
            let exact = Dtw::with_metric(self.metric.clone());
            return DtwDistance::new(exact.fill_cost(x, y).final_cost());
        }

        let x_coarse = reduce_by_half(x);
        let y_coarse = reduce_by_half(y);

        let low_res = self.coarse_path(x_coarse.as_view(), y_coarse.as_view());
        let window = Window::expand_from_path(&low_res, x.len(), y.len());
        debug!(
            path_len = low_res.len(),
            window_cells = window.len(),
            "projected low-resolution path"
        );

        DtwDistance::new(self.windowed_cost(x, y, &window))
    }

    /// Recover an alignment path for the coarsened pair.
    ///
    /// Runs a full, unwindowed DP over the (small) coarsened sequences and
    /// backtracks it; coarsening happens one level only, so the radius does
    /// not narrow the search here. A radius of 0, or a coarsened sequence
    /// with fewer than 2 points, yields an empty path.
    fn coarse_path(&self, x: SequenceView<'_>, y: SequenceView<'_>) -> WarpingPath {
        if x.len() < 2 || y.len() < 2 || self.radius == 0 {
            return WarpingPath::empty();
        }
        let exact = Dtw::with_metric(self.metric.clone());
        backtrack(&exact.fill_cost(x, y))
    }

    /// The DP recurrence restricted to a window of candidate cells.
    ///
    /// Cells outside the window keep the infinity sentinel and never become
    /// valid predecessors. `(0, 0)` is seeded only when in-window; edge
    /// cells use the single-predecessor prefix form. Returns the
    /// accumulated cost at the terminal cell, which stays infinite when the
    /// window never connects the corners.
    fn windowed_cost(&self, x: SequenceView<'_>, y: SequenceView<'_>, window: &Window) -> f64 {
        if window.is_empty() {
            return f64::INFINITY;
        }

        let n = x.len();
        let m = y.len();
        let mut cost = CostMatrix::new(n, m);

        if window.contains(0, 0) {
            cost.set(0, 0, self.metric.distance(x.point(0), y.point(0)));
        }

        for i in 0..n {
            for j in 0..m {
                if (i == 0 && j == 0) || !window.contains(i, j) {
                    continue;
                }
                let d = self.metric.distance(x.point(i), y.point(j));
                let best = if i > 0 && j > 0 {
                    cost.get(i - 1, j)
                        .min(cost.get(i, j - 1))
                        .min(cost.get(i - 1, j - 1))
                } else if i > 0 {
                    cost.get(i - 1, 0)
                } else {
                    cost.get(0, j - 1)
                };
                cost.set(i, j, d + best);
            }
        }

        cost.final_cost()
    }
}
