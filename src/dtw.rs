//! Exact DTW distance computation over the full cost matrix.

use rayon::prelude::*;
use tracing::instrument;

use crate::cost::CostMatrix;
use crate::distance::DtwDistance;
use crate::error::DtwError;
use crate::matrix::PairwiseMatrix;
use crate::metric::{DistanceMetric, Euclidean};
use crate::path::{backtrack, WarpingPath};
use crate::sequence::{check_dims, Sequence, SequenceView};

/// Exact DTW aligner. Immutable configuration, thread-safe and copyable.
///
/// Fills the complete `n × m` cost matrix, so it always finds the true
/// optimum at `O(n·m)` time and space. For long sequences prefer
/// [`FastDtw`](crate::FastDtw).
#[derive(Debug, Clone, Copy, Default)]
pub struct Dtw<M: DistanceMetric = Euclidean> {
    metric: M,
}

impl Dtw<Euclidean> {
    /// Create an aligner using the built-in Euclidean point metric.
    #[must_use]
    pub fn euclidean() -> Self {
        Self { metric: Euclidean }
    }
}

impl<M: DistanceMetric> Dtw<M> {
    /// Create an aligner using a custom point metric.
    pub fn with_metric(metric: M) -> Self {
        Self { metric }
    }

    /// Compute the exact DTW distance between two sequences.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::DimensionMismatch`] | `x` and `y` have different point dimensions |
    #[instrument(skip(self, x, y), fields(n = x.len(), m = y.len()))]
    pub fn distance(
        &self,
        x: SequenceView<'_>,
        y: SequenceView<'_>,
    ) -> Result<DtwDistance, DtwError> {
        check_dims(x, y)?;
        Ok(DtwDistance::new(self.fill_cost(x, y).final_cost()))
    }

    /// Compute the exact DTW distance and the optimal warping path.
    ///
    /// The path is recovered by backtracking the filled cost matrix; on
    /// exact predecessor ties the up/left/diagonal precedence makes it
    /// deterministic. Use [`distance`][Dtw::distance] when only the scalar
    /// is needed.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::DimensionMismatch`] | `x` and `y` have different point dimensions |
    #[instrument(skip(self, x, y), fields(n = x.len(), m = y.len()))]
    pub fn distance_and_path(
        &self,
        x: SequenceView<'_>,
        y: SequenceView<'_>,
    ) -> Result<(DtwDistance, WarpingPath), DtwError> {
        check_dims(x, y)?;
        let cost = self.fill_cost(x, y);
        let distance = DtwDistance::new(cost.final_cost());
        Ok((distance, backtrack(&cost)))
    }

    /// Compute exact DTW distances for all unique pairs in a collection.
    ///
    /// Computation is parallelized across pairs with rayon; each pair owns
    /// its own cost matrix, so no coordination is needed.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::DimensionMismatch`] | Any sequence's point dimension differs from the first's |
    #[instrument(skip(self, sequences), fields(n = sequences.len()))]
    pub fn pairwise(&self, sequences: &[Sequence]) -> Result<PairwiseMatrix, DtwError> {
        check_uniform_dims(sequences)?;

        let n = sequences.len();
        let total_pairs = n * (n - 1) / 2;
        let views: Vec<SequenceView<'_>> = sequences.iter().map(Sequence::as_view).collect();

        let distances: Vec<DtwDistance> = (0..total_pairs)
            .into_par_iter()
            .map(|flat_idx| {
                // Map flat index back to (i, j) with i > j:
                // flat_idx = i*(i-1)/2 + j, so i = floor((1 + sqrt(1 + 8*flat_idx)) / 2)
                let i = ((1.0 + (1.0 + 8.0 * flat_idx as f64).sqrt()) / 2.0).floor() as usize;
                let j = flat_idx - i * (i - 1) / 2;
                DtwDistance::new(self.fill_cost(views[i], views[j]).final_cost())
            })
            .collect();

        Ok(PairwiseMatrix::from_raw(n, distances))
    }

    /// Fill the complete cost matrix for `x` against `y`.
    ///
    /// `cost[0][0]` is seeded with the pointwise distance at the origins;
    /// the first row and column accumulate as prefix sums; every interior
    /// cell takes the cheapest of its up, left, and diagonal predecessors.
    /// Dimensions must already be checked.
    pub(crate) fn fill_cost(&self, x: SequenceView<'_>, y: SequenceView<'_>) -> CostMatrix {
        let n = x.len();
        let m = y.len();
        let mut cost = CostMatrix::new(n, m);

        cost.set(0, 0, self.metric.distance(x.point(0), y.point(0)));
        for i in 1..n {
            let d = self.metric.distance(x.point(i), y.point(0));
            cost.set(i, 0, cost.get(i - 1, 0) + d);
        }
        for j in 1..m {
            let d = self.metric.distance(x.point(0), y.point(j));
            cost.set(0, j, cost.get(0, j - 1) + d);
        }

        for i in 1..n {
            for j in 1..m {
                let d = self.metric.distance(x.point(i), y.point(j));
                let best = cost
                    .get(i - 1, j)
                    .min(cost.get(i, j - 1))
                    .min(cost.get(i - 1, j - 1));
                cost.set(i, j, d + best);
            }
        }

        cost
    }
}

/// Check that every sequence in a batch shares the first sequence's dimension.
pub(crate) fn check_uniform_dims(sequences: &[Sequence]) -> Result<(), DtwError> {
    if let Some(first) = sequences.first() {
        for s in sequences {
            if s.dim() != first.dim() {
                return Err(DtwError::DimensionMismatch {
                    left: first.dim(),
                    right: s.dim(),
                });
            }
        }
    }
    Ok(())
}
