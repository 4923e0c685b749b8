//! D8 direction assignment and flat resolution.

use ndarray::Array2;

use crate::error::FlowError;
use crate::geometry::Direction;
use crate::grid::{FixedPoint, par_from_fn, same_shape};

/// Assigns each cell the direction of its steepest drop.
///
/// Direction codes, with rows growing southward:
///
/// ```text
///   32  16   8
///   64   .   4
///  128   1   2
/// ```
///
/// The drop toward a neighbour is `(dem[cell] - dem[neighbour]) / distance`,
/// with distance 1 for orthogonal and sqrt(2) for diagonal neighbours. The
/// drop is forced to `+inf` when the neighbour lies outside the grid, so
/// border cells always flow out, and when the cell itself is a stream cell,
/// so streams route onward instead of stalling. Directions are scanned in
/// the fixed table order under a strict `>` comparison: the first direction
/// reaching the maximum drop wins and equal later drops never overwrite it.
///
/// A cell with no strictly positive drop keeps code 0 (a flat cell, to be
/// handled by [`resolve_flats`]).
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use flow_routing::{flow_directions, stream_mask};
///
/// let dem = array![
///     [1.0, 5.0, 5.0],
///     [5.0, 4.0, 5.0],
///     [5.0, 5.0, 5.0],
/// ];
/// let stream = stream_mask(&dem);
/// let flow = flow_directions(&dem, &stream).unwrap();
/// assert_eq!(flow[[1, 1]], 32); // steepest drop is north-west, into the stream
/// ```
pub fn flow_directions(
    dem: &Array2<f64>,
    stream: &Array2<bool>,
) -> Result<Array2<u8>, FlowError> {
    same_shape(dem.dim(), stream.dim())?;
    let (rows, cols) = dem.dim();

    Ok(par_from_fn(rows, cols, |r, c| {
        let mut best = 0.0_f64;
        let mut dir = 0u8;
        for d in Direction::ALL {
            let (dr, dc) = d.offset();
            let nr = r as isize + dr;
            let nc = c as isize + dc;
            let outside = nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize;
            let drop = if outside || stream[[r, c]] {
                f64::INFINITY
            } else {
                (dem[[r, c]] - dem[[nr as usize, nc as usize]]) / d.distance()
            };
            if drop > best {
                best = drop;
                dir = d.code();
            }
        }
        dir
    }))
}

/// Spreads directions into flat regions until every reachable zero cell has
/// one.
///
/// Each pass, a zero-direction cell copies the direction value of its first
/// neighbour (in table order) that already has one. This borrows a usable
/// direction from the resolved front rather than computing a flat-routing
/// gradient. A zero region with no resolved neighbour anywhere on its rim
/// never changes; the loop stops as soon as a pass changes nothing and the
/// leftover cells are counted in [`FixedPoint::unresolved`].
pub fn resolve_flats(flow: &Array2<u8>, max_passes: usize) -> FixedPoint<u8> {
    let (rows, cols) = flow.dim();
    let mut dirs = flow.clone();

    let mut passes = 0;
    let mut settled = false;
    while passes < max_passes && !settled {
        passes += 1;
        let next = par_from_fn(rows, cols, |r, c| {
            let cur = dirs[[r, c]];
            if cur != 0 {
                return cur;
            }
            for d in Direction::ALL {
                let (dr, dc) = d.offset();
                let nr = r as isize + dr;
                let nc = c as isize + dc;
                if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                    continue;
                }
                let v = dirs[[nr as usize, nc as usize]];
                if v != 0 {
                    return v;
                }
            }
            0
        });
        settled = next == dirs;
        dirs = next;
    }

    let unresolved = dirs.iter().filter(|&&d| d == 0).count();
    FixedPoint {
        stage: "flat resolution",
        grid: dirs,
        passes,
        settled,
        unresolved,
    }
}
