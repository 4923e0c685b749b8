//! D8 neighbour geometry: offsets, direction codes, and boundary masks.
//!
//! Rows grow southward and columns grow eastward, so the offset `(1, 0)`
//! points south. Directions are scanned in a fixed order; every algorithm in
//! this crate that picks "the first" direction relies on it, which is what
//! makes tie-breaking deterministic.

use ndarray::Array2;

/// One of the eight D8 flow directions.
///
/// Each direction owns a single-bit code, so a direction grid stores `u8`
/// values in {1, 2, 4, 8, 16, 32, 64, 128}, with 0 meaning "no direction
/// yet" (a flat cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    S,
    SE,
    E,
    NE,
    N,
    NW,
    W,
    SW,
}

impl Direction {
    /// All directions in scan order. Index in this table + 1 is the D8
    /// index, and the code is `1 << index`.
    pub const ALL: [Direction; 8] = [
        Direction::S,
        Direction::SE,
        Direction::E,
        Direction::NE,
        Direction::N,
        Direction::NW,
        Direction::W,
        Direction::SW,
    ];

    /// (row-delta, col-delta) of the neighbour this direction points at.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::S => (1, 0),
            Direction::SE => (1, 1),
            Direction::E => (0, 1),
            Direction::NE => (-1, 1),
            Direction::N => (-1, 0),
            Direction::NW => (-1, -1),
            Direction::W => (0, -1),
            Direction::SW => (1, -1),
        }
    }

    /// Single-bit code stored in direction grids.
    pub const fn code(self) -> u8 {
        1u8 << (self as u8)
    }

    /// Travel distance to the neighbour, in cell units.
    pub const fn distance(self) -> f64 {
        match self {
            Direction::S | Direction::E | Direction::N | Direction::W => 1.0,
            _ => std::f64::consts::SQRT_2,
        }
    }

    /// Decode a grid value back into a direction. `None` for 0 and for
    /// anything that is not a single-bit code.
    pub fn from_code(code: u8) -> Option<Direction> {
        match code {
            1 => Some(Direction::S),
            2 => Some(Direction::SE),
            4 => Some(Direction::E),
            8 => Some(Direction::NE),
            16 => Some(Direction::N),
            32 => Some(Direction::NW),
            64 => Some(Direction::W),
            128 => Some(Direction::SW),
            _ => None,
        }
    }
}

/// True on the outermost ring of rows and columns.
pub fn border_mask(rows: usize, cols: usize) -> Array2<bool> {
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        r == 0 || r == rows - 1 || c == 0 || c == cols - 1
    })
}

/// True where shifting a cell by `offset` lands outside the grid.
pub fn outside_mask(rows: usize, cols: usize, offset: (isize, isize)) -> Array2<bool> {
    let (dr, dc) = offset;
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let nr = r as isize + dr;
        let nc = c as isize + dc;
        nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_single_bits_in_scan_order() {
        let codes: Vec<u8> = Direction::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec![1, 2, 4, 8, 16, 32, 64, 128]);
    }

    #[test]
    fn offsets_match_the_fixed_table() {
        let offsets: Vec<(isize, isize)> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(
            offsets,
            vec![
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
                (0, -1),
                (1, -1)
            ]
        );
    }

    #[test]
    fn from_code_inverts_code() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_code(d.code()), Some(d));
        }
        assert_eq!(Direction::from_code(0), None);
        assert_eq!(Direction::from_code(3), None);
        assert_eq!(Direction::from_code(255), None);
    }

    #[test]
    fn orthogonal_and_diagonal_distances() {
        for d in Direction::ALL {
            let (dr, dc) = d.offset();
            if dr == 0 || dc == 0 {
                assert_eq!(d.distance(), 1.0);
            } else {
                assert_eq!(d.distance(), std::f64::consts::SQRT_2);
            }
        }
    }

    #[test]
    fn border_ring() {
        let b = border_mask(3, 4);
        for r in 0..3 {
            for c in 0..4 {
                let expected = r == 0 || r == 2 || c == 0 || c == 3;
                assert_eq!(b[[r, c]], expected, "({r}, {c})");
            }
        }
        // a single cell is all border
        assert!(border_mask(1, 1)[[0, 0]]);
    }

    #[test]
    fn outside_by_offset() {
        let north = outside_mask(3, 3, (-1, 0));
        for c in 0..3 {
            assert!(north[[0, c]]);
            assert!(!north[[1, c]]);
            assert!(!north[[2, c]]);
        }
        let se = outside_mask(3, 3, (1, 1));
        assert!(se[[2, 2]]);
        assert!(se[[2, 0]]);
        assert!(se[[0, 2]]);
        assert!(!se[[1, 1]]);
    }
}
