//! Multivariate sequence types with validation guarantees.

use crate::error::DtwError;

/// Owned, validated sequence of `d`-dimensional points, stored row-major.
///
/// Guaranteed non-empty, with `dim >= 1`, data length a multiple of `dim`,
/// and all values finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    data: Vec<f64>,
    dim: usize,
}

impl Sequence {
    /// Create a sequence from flat row-major data and a point dimension.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::ZeroDimension`] | `dim` is 0 |
    /// | [`DtwError::EmptySequence`] | `data` is empty |
    /// | [`DtwError::MisalignedData`] | `data.len()` is not a multiple of `dim` |
    /// | [`DtwError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(data: Vec<f64>, dim: usize) -> Result<Self, DtwError> {
        validate(&data, dim)?;
        Ok(Self { data, dim })
    }

    /// Create a sequence from one row per point, as delivered across the
    /// external `[n × d]` matrix boundary.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `rows` is empty |
    /// | [`DtwError::ZeroDimension`] | The first row is empty |
    /// | [`DtwError::RaggedRow`] | A row's width differs from the first row's |
    /// | [`DtwError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, DtwError> {
        let first = rows.first().ok_or(DtwError::EmptySequence)?;
        let dim = first.len();
        if dim == 0 {
            return Err(DtwError::ZeroDimension);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(DtwError::RaggedRow {
                    index,
                    expected: dim,
                    found: row.len(),
                });
            }
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        validate(&data, dim)?;
        Ok(Self { data, dim })
    }

    /// Create a sequence without validation. For internal use where data is
    /// already known valid (e.g. averages of validated points).
    pub(crate) fn new_unchecked(data: Vec<f64>, dim: usize) -> Self {
        debug_assert!(validate(&data, dim).is_ok());
        Self { data, dim }
    }

    /// Borrow this sequence as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_> {
        SequenceView {
            data: &self.data,
            dim: self.dim,
        }
    }

    /// Return the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    /// Return true if the sequence has no points. Always `false` for
    /// instances built through the validating constructors; provided to
    /// satisfy the `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the point dimension `d`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return point `i` as a slice of length `dim`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[must_use]
    pub fn point(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Consume and return the flat row-major data.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

fn validate(data: &[f64], dim: usize) -> Result<(), DtwError> {
    if dim == 0 {
        return Err(DtwError::ZeroDimension);
    }
    if data.is_empty() {
        return Err(DtwError::EmptySequence);
    }
    if data.len() % dim != 0 {
        return Err(DtwError::MisalignedData {
            len: data.len(),
            dim,
        });
    }
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(DtwError::NonFiniteValue { index });
    }
    Ok(())
}

/// Borrowed, validated view into a sequence. Zero-copy reference.
#[derive(Debug, Clone, Copy)]
pub struct SequenceView<'a> {
    data: &'a [f64],
    dim: usize,
}

impl<'a> SequenceView<'a> {
    /// Create a view over flat row-major data, validating as [`Sequence::new`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Sequence::new`].
    pub fn new(data: &'a [f64], dim: usize) -> Result<Self, DtwError> {
        validate(data, dim)?;
        Ok(Self { data, dim })
    }

    /// Return the underlying flat slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Return the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    /// Return true if the view has no points. Always `false` for validated
    /// views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the point dimension `d`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return point `i` as a slice of length `dim`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[must_use]
    pub fn point(&self, i: usize) -> &'a [f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }
}

/// Check that two sequences share a point dimension.
pub(crate) fn check_dims(x: SequenceView<'_>, y: SequenceView<'_>) -> Result<(), DtwError> {
    if x.dim() != y.dim() {
        return Err(DtwError::DimensionMismatch {
            left: x.dim(),
            right: y.dim(),
        });
    }
    Ok(())
}
