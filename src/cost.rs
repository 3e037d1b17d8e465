//! Dense accumulated-cost matrix for DP alignment.

/// Flat row-major `rows × cols` grid of partial alignment costs.
///
/// Every cell starts at `f64::INFINITY`, the "unreachable" sentinel; cells
/// outside an active window are never written and must never win a
/// predecessor comparison, which the sentinel guarantees.
#[derive(Debug, Clone)]
pub(crate) struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![f64::INFINITY; rows * cols],
        }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j] = value;
    }

    /// The accumulated cost at the terminal cell `(rows-1, cols-1)`.
    pub(crate) fn final_cost(&self) -> f64 {
        self.get(self.rows - 1, self.cols - 1)
    }
}
