//! Catchment labelling and basin border detection.

use ndarray::Array2;

use crate::error::FlowError;
use crate::geometry::Direction;
use crate::grid::{FixedPoint, par_from_fn, same_shape};

/// Propagates catchment labels backward along flow links.
///
/// `seeds` holds a nonzero label on every stream cell and 0 elsewhere. Each
/// pass, an unlabelled cell looks at the single downstream neighbour its own
/// direction code points at; if that neighbour already carries a label, the
/// cell copies it. Labels therefore spread upstream from the streams, one
/// link per pass, until every cell whose flow path reaches a stream is
/// labelled.
///
/// Cells with code 0, cells whose direction points off the grid, and cells
/// whose downstream chain never meets a labelled cell keep label 0. That is
/// a legitimate terminal state, counted in [`FixedPoint::unresolved`].
pub fn assign_catchments(
    flow: &Array2<u8>,
    seeds: &Array2<u32>,
    max_passes: usize,
) -> Result<FixedPoint<u32>, FlowError> {
    same_shape(flow.dim(), seeds.dim())?;
    let (rows, cols) = flow.dim();
    let mut labels = seeds.clone();

    let mut passes = 0;
    let mut settled = false;
    while passes < max_passes && !settled {
        passes += 1;
        let next = par_from_fn(rows, cols, |r, c| {
            let cur = labels[[r, c]];
            if cur != 0 {
                return cur;
            }
            let Some(d) = Direction::from_code(flow[[r, c]]) else {
                return 0;
            };
            let (dr, dc) = d.offset();
            let nr = r as isize + dr;
            let nc = c as isize + dc;
            if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                return 0;
            }
            labels[[nr as usize, nc as usize]]
        });
        settled = next == labels;
        labels = next;
    }

    let unresolved = labels.iter().filter(|&&l| l == 0).count();
    Ok(FixedPoint {
        stage: "catchment labelling",
        grid: labels,
        passes,
        settled,
        unresolved,
    })
}

/// Marks cells sitting on a basin boundary.
///
/// A cell is marked when any in-bounds neighbour carries a different label.
/// Off-grid neighbours are skipped, so an edge cell is a border only if it
/// disagrees with a neighbour inside the grid; the marking is symmetric
/// across every adjacent pair.
pub fn basin_borders(labels: &Array2<u32>) -> Array2<bool> {
    let (rows, cols) = labels.dim();
    par_from_fn(rows, cols, |r, c| {
        Direction::ALL.iter().any(|d| {
            let (dr, dc) = d.offset();
            let nr = r as isize + dr;
            let nc = c as isize + dc;
            if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                return false;
            }
            labels[[nr as usize, nc as usize]] != labels[[r, c]]
        })
    })
}
