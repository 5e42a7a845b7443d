#[cfg(test)]
mod _tests_aps34ide {
    use super::super::aps34ide::{add_strain_coordinates, aps_rotation, strain_coordinates};
    use crate::table::AsciiTable;
    use nalgebra::{Matrix3, Vector3};

    const TOL: f64 = 1e-12;

    #[test]
    fn test_rotation_is_proper() {
        let r = aps_rotation();
        assert!((r * r.transpose() - Matrix3::identity()).norm() < TOL);
        assert!((r.determinant() - 1.0).abs() < TOL);
        // x axis is the rotation axis
        assert!((r * Vector3::x() - Vector3::x()).norm() < TOL);
    }

    #[test]
    fn test_known_positions() {
        let half_sqrt2 = 0.5 * 2.0_f64.sqrt();

        let c = strain_coordinates(&Vector3::new(1.0, 0.0, 0.0), 0.0);
        assert!((c - Vector3::new(-1.0, 0.0, 0.0)).norm() < TOL);

        let c = strain_coordinates(&Vector3::new(0.0, 0.0, 1.0), 0.0);
        assert!((c - Vector3::new(0.0, half_sqrt2, half_sqrt2)).norm() < TOL);

        // Depth offsets the negated Z coordinate
        let c = strain_coordinates(&Vector3::new(0.0, 1.0, 0.0), 1.0);
        assert!((c - Vector3::new(0.0, 0.0, -2.0 * half_sqrt2)).norm() < TOL);
    }

    #[test]
    fn test_add_strain_coordinates() {
        let mut table = AsciiTable::parse("1_X\t2_X\t3_X\tdepth\n1\t0\t0\t0\n0\t0\t1\t0\n").unwrap();

        add_strain_coordinates(&mut table, "X", "depth", "add_aps34ide_strain_coords v0.1.0\t-f X").unwrap();

        assert_eq!(&table.labels()[4..], &["1_coord", "2_coord", "3_coord"]);
        assert_eq!(table.rows()[0][4], "-1");
        let y: f64 = table.rows()[1][5].parse().unwrap();
        assert!((y - 0.5 * 2.0_f64.sqrt()).abs() < TOL);
        assert_eq!(
            table.comments().last().map(String::as_str),
            Some("coord: add_aps34ide_strain_coords v0.1.0\t-f X")
        );
    }

    #[test]
    fn test_depth_from_vector_group() {
        let mut table = AsciiTable::parse("1_X 2_X 3_X 1_d 2_d\n0 1 0 1 5\n").unwrap();
        add_strain_coordinates(&mut table, "X", "d", "stamp").unwrap();

        let z: f64 = table.rows()[0][7].parse().unwrap();
        assert!((z + 2.0_f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn test_missing_columns_are_errors() {
        let mut table = AsciiTable::parse("1_X 2_X 3_X depth\n1 2 3 4\n").unwrap();
        assert!(add_strain_coordinates(&mut table, "pos", "depth", "stamp").is_err());
        assert!(add_strain_coordinates(&mut table, "X", "z", "stamp").is_err());
        assert_eq!(table.labels().len(), 4);
    }
}
