//! Pointwise distance metrics.

/// Pairwise cost between two points of equal dimensionality.
///
/// Aligners are generic over `M: DistanceMetric`, so a custom metric
/// monomorphizes straight into the DP inner loop with no dynamic dispatch.
/// Implementations may assume `a.len() == b.len()`: the aligners reject
/// mismatched sequence dimensions before any distance is computed.
pub trait DistanceMetric: Clone + Send + Sync {
    /// Distance between points `a` and `b`.
    ///
    /// Must be non-negative and symmetric, with `distance(a, a) == 0`.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}

/// Euclidean (L2) point distance: `sqrt(Σ (aᵢ - bᵢ)²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}
