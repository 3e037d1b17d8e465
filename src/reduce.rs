//! Sequence coarsening for multiresolution alignment.

use crate::sequence::{Sequence, SequenceView};

/// Halve a sequence's resolution by pairwise averaging.
///
/// Output length is `⌈n/2⌉`. Output point `i` is the component-wise
/// arithmetic mean of input points `2i` and `2i+1`; a trailing odd element
/// is carried over unchanged. Dimension is preserved. A length-1 input
/// yields the same single point.
#[must_use = "returns a new coarsened sequence; the original is unchanged"]
pub fn reduce_by_half(seq: SequenceView<'_>) -> Sequence {
    let n = seq.len();
    let dim = seq.dim();
    let reduced_len = n.div_ceil(2);

    let mut data = Vec::with_capacity(reduced_len * dim);
    for i in 0..reduced_len {
        if 2 * i + 1 < n {
            let first = seq.point(2 * i);
            let second = seq.point(2 * i + 1);
            data.extend(first.iter().zip(second).map(|(x, y)| (x + y) / 2.0));
        } else {
            data.extend_from_slice(seq.point(2 * i));
        }
    }

    // Means of finite values are finite, so no revalidation is needed.
    Sequence::new_unchecked(data, dim)
}
