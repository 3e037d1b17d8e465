//! Exact and approximate Dynamic Time Warping for multivariate sequences.
//!
//! Pure math library — zero I/O. Provides exact DTW distance computation
//! over sequences of `d`-dimensional points, optimal warping path
//! extraction, the FastDTW multiresolution approximation, and parallel
//! pairwise distance matrices.
//!
//! ```
//! use fastwarp::{Dtw, FastDtw, Sequence};
//!
//! let x = Sequence::from_rows(&[vec![0.0], vec![1.0], vec![2.0], vec![3.0]])?;
//! let y = Sequence::from_rows(&[vec![0.0], vec![1.0], vec![2.0], vec![3.0]])?;
//!
//! let exact = Dtw::euclidean().distance(x.as_view(), y.as_view())?;
//! assert_eq!(exact.value(), 0.0);
//!
//! let approx = FastDtw::new(2).distance(x.as_view(), y.as_view())?;
//! assert_eq!(approx.value(), 0.0);
//! # Ok::<(), fastwarp::DtwError>(())
//! ```

mod cost;
mod distance;
mod dtw;
mod error;
mod fastdtw;
mod matrix;
mod metric;
mod path;
mod reduce;
mod sequence;
mod window;

pub use distance::DtwDistance;
pub use dtw::Dtw;
pub use error::DtwError;
pub use fastdtw::FastDtw;
pub use matrix::PairwiseMatrix;
pub use metric::{DistanceMetric, Euclidean};
pub use path::{WarpingPath, WarpingStep};
pub use reduce::reduce_by_half;
pub use sequence::{Sequence, SequenceView};
