#[cfg(test)]
mod tests {
    use flow_routing::{Direction, basin_borders};
    use ndarray::{Array2, array};

    #[test]
    fn test_split_grid_marks_both_sides_of_the_divide() {
        let labels: Array2<u32> = array![
            [1, 1, 2, 2],
            [1, 1, 2, 2],
        ];
        let border = basin_borders(&labels);
        let expected: Array2<bool> = array![
            [false, true, true, false],
            [false, true, true, false],
        ];
        assert_eq!(border, expected);
    }

    #[test]
    fn test_uniform_labels_have_no_border() {
        // edge cells included: an off-grid neighbour never counts as
        // different
        let labels: Array2<u32> = Array2::from_elem((3, 4), 7);
        let border = basin_borders(&labels);
        assert!(border.iter().all(|&b| !b));
    }

    #[test]
    fn test_unlabelled_cells_count_as_their_own_basin() {
        let labels: Array2<u32> = array![[0, 1]];
        let border = basin_borders(&labels);
        assert!(border[[0, 0]]);
        assert!(border[[0, 1]]);
    }

    #[test]
    fn test_marking_is_symmetric() {
        let labels: Array2<u32> = array![
            [1, 1, 2],
            [1, 3, 2],
            [3, 3, 2],
        ];
        let border = basin_borders(&labels);
        let (rows, cols) = labels.dim();
        for r in 0..rows {
            for c in 0..cols {
                for d in Direction::ALL {
                    let (dr, dc) = d.offset();
                    let nr = r as isize + dr;
                    let nc = c as isize + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if labels[[r, c]] != labels[[nr, nc]] {
                        assert!(border[[r, c]]);
                        assert!(border[[nr, nc]]);
                    }
                }
            }
        }
    }
}
