//! Error types for sequence validation and DTW computation.

/// Errors from sequence validation and DTW distance computation.
#[derive(Debug, thiserror::Error)]
pub enum DtwError {
    /// Returned when a sequence with zero points is provided.
    #[error("sequence must contain at least one point")]
    EmptySequence,

    /// Returned when a point dimension of zero is declared.
    #[error("point dimension must be at least 1")]
    ZeroDimension,

    /// Returned when flat sequence data does not divide evenly into points.
    #[error("data length {len} is not a multiple of point dimension {dim}")]
    MisalignedData {
        /// Total number of values supplied.
        len: usize,
        /// Declared point dimension.
        dim: usize,
    },

    /// Returned when a row-shaped input contains rows of differing width.
    #[error("row {index} has dimension {found}, expected {expected}")]
    RaggedRow {
        /// Position of the offending row.
        index: usize,
        /// Dimension established by the first row.
        expected: usize,
        /// Dimension of the offending row.
        found: usize,
    },

    /// Returned when sequence data contains NaN, infinity, or negative infinity.
    #[error("sequence contains non-finite value at flat index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when the two sequences being aligned have different point dimensions.
    #[error("point dimensions differ between sequences: {left} vs {right}")]
    DimensionMismatch {
        /// Dimension of the first sequence.
        left: usize,
        /// Dimension of the second sequence.
        right: usize,
    },
}
