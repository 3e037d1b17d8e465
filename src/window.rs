//! Search windows: sets of cost-matrix cells eligible for computation.

use std::collections::HashSet;

use crate::path::{WarpingPath, WarpingStep};

/// Set of `(i, j)` cells a windowed DP pass is allowed to fill. Membership
/// is by value; everything outside stays at the infinity sentinel.
#[derive(Debug, Clone, Default)]
pub(crate) struct Window {
    cells: HashSet<WarpingStep>,
}

impl Window {
    /// Project a low-resolution path into a full-resolution window.
    ///
    /// Each low-resolution step `(i, j)` anchors at `(2i, 2j)` and
    /// contributes the 3x3 ring of neighbors around the anchor, clipped to
    /// `[0, len_x) x [0, len_y)`. The set deduplicates cells contributed by
    /// several path steps.
    pub(crate) fn expand_from_path(path: &WarpingPath, len_x: usize, len_y: usize) -> Self {
        let mut cells = HashSet::new();
        for step in path {
            let anchor_a = step.a * 2;
            let anchor_b = step.b * 2;
            for a in anchor_a.saturating_sub(1)..(anchor_a + 2).min(len_x) {
                for b in anchor_b.saturating_sub(1)..(anchor_b + 2).min(len_y) {
                    cells.insert(WarpingStep { a, b });
                }
            }
        }
        Self { cells }
    }

    pub(crate) fn contains(&self, a: usize, b: usize) -> bool {
        self.cells.contains(&WarpingStep { a, b })
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
