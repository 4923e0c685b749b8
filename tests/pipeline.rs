//! Whole-pipeline run on a hand-checked 5x5 grid: one stream cell in the
//! north-west corner, one interior pit, level terrain everywhere else.

#[cfg(test)]
mod tests {
    use flow_routing::{
        Direction, assign_catchments, basin_borders, fill_pits, flow_directions, resolve_flats,
        stream_mask,
    };
    use ndarray::{Array2, array};

    fn dem() -> Array2<f64> {
        array![
            [1.0, 5.0, 5.0, 5.0, 5.0],
            [5.0, 5.0, 5.0, 5.0, 5.0],
            [5.0, 5.0, 5.0, 5.0, 5.0],
            [5.0, 5.0, 5.0, 0.5, 5.0],
            [5.0, 5.0, 5.0, 5.0, 5.0],
        ]
    }

    #[test]
    fn test_route_to_the_corner_stream() {
        let dem = dem();
        let stream = stream_mask(&dem);
        assert!(stream[[0, 0]]);
        assert_eq!(stream.iter().filter(|&&s| s).count(), 1);

        // the pit rises to the level of its neighbours, the stream keeps
        // its own elevation
        let fill = fill_pits(&dem, &stream, 25).unwrap();
        assert!(fill.settled);
        assert_eq!(fill.passes, 3);
        let filled = fill.into_grid().unwrap();
        assert_eq!(filled[[3, 3]], 5.0);
        assert_eq!(filled[[0, 0]], 1.0);
        for (z, orig) in filled.iter().zip(dem.iter()) {
            assert!(z >= orig);
        }

        // stream takes code 1, borders their first outside direction, the
        // stream's diagonal neighbour points at it, the level interior
        // stays flat
        let flow = flow_directions(&filled, &stream).unwrap();
        let expected_raw: Array2<u8> = array![
            [1, 8, 8, 8, 2],
            [32, 32, 0, 0, 2],
            [32, 0, 0, 0, 2],
            [32, 0, 0, 0, 2],
            [1, 1, 1, 1, 1],
        ];
        assert_eq!(flow, expected_raw);

        // flats borrow from their first resolved neighbour in scan order
        let flats = resolve_flats(&flow, 25);
        assert!(flats.settled);
        assert_eq!(flats.passes, 2);
        assert_eq!(flats.unresolved, 0);
        let resolved = flats.into_grid().unwrap();
        let expected: Array2<u8> = array![
            [1, 8, 8, 8, 2],
            [32, 32, 8, 2, 2],
            [32, 32, 32, 2, 2],
            [32, 1, 1, 1, 2],
            [1, 1, 1, 1, 1],
        ];
        assert_eq!(resolved, expected);
        assert!(
            resolved
                .iter()
                .all(|&d| Direction::from_code(d).is_some())
        );

        // only the diagonal chain into the corner reaches the stream; the
        // rest drains off-grid and legitimately stays unlabelled
        let seeds = stream.mapv(u32::from);
        let catch = assign_catchments(&resolved, &seeds, 25).unwrap();
        assert!(catch.settled);
        assert_eq!(catch.passes, 3);
        assert_eq!(catch.unresolved, 22);
        assert_eq!(catch.grid[[0, 0]], 1);
        assert_eq!(catch.grid[[1, 1]], 1);
        assert_eq!(catch.grid[[2, 2]], 1);

        let border = basin_borders(&catch.grid);
        assert!(border[[0, 0]]);
        assert!(border[[1, 1]]);
        assert!(!border[[4, 4]]);
        assert!(!border[[0, 4]]);
    }
}
