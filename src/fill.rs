//! Pit removal by flooding a DEM down to a fixed point.

use ndarray::Array2;

use crate::error::FlowError;
use crate::geometry::{Direction, border_mask};
use crate::grid::{FixedPoint, par_from_fn, same_shape};

/// Removes pits from a DEM so that every cell drains to a stream cell or to
/// the grid border.
///
/// Grayscale reconstruction by erosion: stream and border cells start at
/// their true elevation, everything else at `+inf`, and each pass lowers
/// every cell to `max(orig, min over the 3x3 window)` until nothing changes.
/// The window includes the cell itself, so the source cells never rise and
/// the result is the smallest surface above `orig` on which every cell has a
/// non-ascending 8-connected path to an outlet.
///
/// Elevations never decrease below the input, and cells that already drained
/// come back unchanged. Pass count grows with the relief distance from the
/// deepest pit to its outlet, which can be large on broad flat terrain;
/// `max_passes` bounds the loop and a capped-out run is reported through
/// [`FixedPoint::settled`].
///
/// # Parameters
///
/// - `orig`: elevation grid.
/// - `stream`: mask of cells treated as fixed drains.
/// - `max_passes`: iteration cap.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use flow_routing::fill_pits;
///
/// let dem = array![
///     [10.0, 12.0, 10.0],
///     [12.0, 9.0, 12.0],
///     [10.0, 12.0, 10.0],
/// ];
/// let stream = ndarray::Array2::from_elem((3, 3), false);
/// let filled = fill_pits(&dem, &stream, 100).unwrap().into_grid().unwrap();
/// assert_eq!(filled[[1, 1]], 10.0); // raised to the spill elevation
/// ```
pub fn fill_pits(
    orig: &Array2<f64>,
    stream: &Array2<bool>,
    max_passes: usize,
) -> Result<FixedPoint<f64>, FlowError> {
    same_shape(orig.dim(), stream.dim())?;
    let (rows, cols) = orig.dim();
    let border = border_mask(rows, cols);

    // outlets keep their elevation, everything else starts flooded
    let mut elev = Array2::from_shape_fn((rows, cols), |(r, c)| {
        if stream[[r, c]] || border[[r, c]] {
            orig[[r, c]]
        } else {
            f64::INFINITY
        }
    });

    let mut passes = 0;
    let mut settled = false;
    while passes < max_passes && !settled {
        passes += 1;
        let next = par_from_fn(rows, cols, |r, c| {
            let mut low = elev[[r, c]];
            for d in Direction::ALL {
                let (dr, dc) = d.offset();
                let nr = r as isize + dr;
                let nc = c as isize + dc;
                if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                    continue;
                }
                let zn = elev[[nr as usize, nc as usize]];
                if zn < low {
                    low = zn;
                }
            }
            orig[[r, c]].max(low)
        });
        settled = next == elev;
        elev = next;
    }

    let unresolved = elev.iter().filter(|z| !z.is_finite()).count();
    Ok(FixedPoint {
        stage: "pit filling",
        grid: elev,
        passes,
        settled,
        unresolved,
    })
}
