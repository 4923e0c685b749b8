//! Whole-grid pass discipline shared by the fixed-point stages.
//!
//! Every pass reads one fully materialised grid and writes a disjoint new
//! one. Updating cells in place within a pass would change which neighbours
//! count as already resolved and make the result depend on traversal order.

use ndarray::Array2;
use rayon::prelude::*;

use crate::error::FlowError;

/// Outcome of a bounded fixed-point stage.
///
/// Carries the grid produced by the last completed pass even when the pass
/// cap was hit, so a caller can inspect or keep partial output.
#[derive(Debug, Clone)]
pub struct FixedPoint<T> {
    /// Stage name used in diagnostics.
    pub stage: &'static str,
    /// Grid produced by the last completed pass.
    pub grid: Array2<T>,
    /// Passes that ran.
    pub passes: usize,
    /// True when the last pass changed no cell.
    pub settled: bool,
    /// Cells still without a value when iteration stopped: infinite
    /// elevations, zero directions, or zero labels. A settled grid may keep
    /// unresolved cells (an enclosed flat, a cell draining off-grid); that
    /// is a reported condition, not a failure.
    pub unresolved: usize,
}

impl<T> FixedPoint<T> {
    /// The final grid, or [`FlowError::NonConvergence`] if the pass cap was
    /// reached while cells were still changing.
    pub fn into_grid(self) -> Result<Array2<T>, FlowError> {
        if self.settled {
            Ok(self.grid)
        } else {
            Err(FlowError::NonConvergence {
                stage: self.stage,
                passes: self.passes,
            })
        }
    }
}

/// Build a grid row-parallel from a per-cell function.
pub(crate) fn par_from_fn<T, F>(rows: usize, cols: usize, f: F) -> Array2<T>
where
    T: Send,
    F: Fn(usize, usize) -> T + Sync,
{
    let data: Vec<T> = (0..rows)
        .into_par_iter()
        .flat_map(|row| (0..cols).map(|col| f(row, col)).collect::<Vec<T>>())
        .collect();
    Array2::from_shape_vec((rows, cols), data).expect("row-major data matches shape")
}

/// Fail fast when two grids that are combined do not line up.
pub(crate) fn same_shape(left: (usize, usize), right: (usize, usize)) -> Result<(), FlowError> {
    if left == right {
        Ok(())
    } else {
        Err(FlowError::DimensionMismatch { left, right })
    }
}
