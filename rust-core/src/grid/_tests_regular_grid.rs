#[cfg(test)]
mod _tests_regular_grid {
    use super::super::regular_grid::RegularGrid;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_new_rejects_invalid_parameters() {
        assert!(RegularGrid::new([0, 4, 4], [1.0, 1.0, 1.0]).is_err());
        assert!(RegularGrid::new([4, 4, 4], [1.0, 0.0, 1.0]).is_err());
        assert!(RegularGrid::new([4, 4, 4], [1.0, 1.0, -2.0]).is_err());
        assert!(RegularGrid::new([4, 4, 4], [f64::NAN, 1.0, 1.0]).is_err());
        assert!(RegularGrid::new([1, 1, 1], [1.0, 1.0, 1.0]).is_ok());
        // Any positive extent is admissible, however small
        assert!(RegularGrid::new([4, 4, 4], [1e-13, 1.0, 1.0]).is_ok());
    }

    #[test]
    fn test_location_index_round_trip() {
        let grid = RegularGrid::new([3, 4, 5], [1.0, 2.0, 3.0]).unwrap();
        assert_eq!(grid.points(), 60);

        for idx in 0..grid.points() {
            let [x, y, z] = grid.location(idx);
            assert_eq!(grid.index([x as i64, y as i64, z as i64]), idx);
        }
        // x runs fastest
        assert_eq!(grid.location(1), [1, 0, 0]);
        assert_eq!(grid.location(3), [0, 1, 0]);
        assert_eq!(grid.location(12), [0, 0, 1]);
    }

    #[test]
    fn test_index_wraps_periodically() {
        let grid = RegularGrid::new([3, 4, 5], [1.0, 1.0, 1.0]).unwrap();
        assert_eq!(grid.index([-1, 0, 0]), grid.index([2, 0, 0]));
        assert_eq!(grid.index([3, 4, 5]), 0);
        assert_eq!(grid.index([0, -1, -1]), grid.index([0, 3, 4]));
    }

    #[test]
    fn test_step_and_cell_centre() {
        let grid = RegularGrid::new([2, 4, 8], [1.0, 2.0, 4.0]).unwrap();
        let step = grid.step();
        assert!((step.x - 0.5).abs() < TOL);
        assert!((step.y - 0.5).abs() < TOL);
        assert!((step.z - 0.5).abs() < TOL);
        assert!((grid.cell_volume() - 0.125).abs() < TOL);

        let centre = grid.cell_centre([1, 2, 7]);
        assert!((centre.x - 0.75).abs() < TOL);
        assert!((centre.y - 1.25).abs() < TOL);
        assert!((centre.z - 3.75).abs() < TOL);
    }

    #[test]
    fn test_node_indexing() {
        let grid = RegularGrid::new([2, 3, 4], [1.0, 1.0, 1.0]).unwrap();
        assert_eq!(grid.node_count(), 3 * 4 * 5);
        assert_eq!(grid.node_index([0, 0, 0]), 0);
        assert_eq!(grid.node_index([2, 3, 4]), grid.node_count() - 1);
        assert_eq!(grid.node_index([0, 1, 0]), 3);
    }
}
