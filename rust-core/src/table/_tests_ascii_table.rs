#[cfg(test)]
mod _tests_ascii_table {
    use super::super::ascii_table::{header_count, normalize_labels, AsciiTable};
    use crate::interfaces::ColumnShape;

    const TOL: f64 = 1e-12;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_count_variants() {
        assert_eq!(header_count("3\theader"), Some(3));
        assert_eq!(header_count("12 HEADER"), Some(12));
        assert_eq!(header_count("2head"), Some(2));
        assert_eq!(header_count("1_pos 2_pos 3_pos"), None);
        assert_eq!(header_count("header"), None);
    }

    #[test]
    fn test_parse_with_header_count() {
        let text = "3\theader\n\
                    spectral solver output\n\
                    postResults v1\n\
                    x\ty\tz\n\
                    1\t2\t3\n\
                    4\t5\t6\n";
        let table = AsciiTable::parse(text).unwrap();

        assert_eq!(table.comments(), &labels(&["spectral solver output", "postResults v1"])[..]);
        assert_eq!(table.labels(), &labels(&["x", "y", "z"])[..]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1], labels(&["4", "5", "6"]));
    }

    #[test]
    fn test_parse_without_header_count() {
        let table = AsciiTable::parse("a b\n1 2\n3 4\n").unwrap();
        assert!(table.comments().is_empty());
        assert_eq!(table.labels(), &labels(&["a", "b"])[..]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_short_and_blank_rows_are_dropped() {
        let table = AsciiTable::parse("a b c\n1 2 3\n4 5\n\n7 8 9 10\n").unwrap();
        assert_eq!(table.len(), 2);
        // Surplus fields are truncated
        assert_eq!(table.rows()[1], labels(&["7", "8", "9"]));
    }

    #[test]
    fn test_parse_errors() {
        assert!(AsciiTable::parse("").is_err());
        assert!(AsciiTable::parse("0 header\na\n1\n").is_err());
        assert!(AsciiTable::parse("4 header\ncomment\na b\n").is_err());
    }

    #[test]
    fn test_normalize_labels() {
        let normalized = normalize_labels(labels(&[
            "1_pos", "2_pos", "3_pos", "1_depth", "1_1_f", "1_phase",
        ]));
        assert_eq!(
            normalized,
            labels(&["1_pos", "2_pos", "3_pos", "depth", "1_f", "phase"])
        );
    }

    #[test]
    fn test_column_index_by_shape() {
        let table = AsciiTable::new(
            Vec::new(),
            labels(&["elem", "1_pos", "2_pos", "3_pos", "1_f", "2_f", "3_f"]),
            Vec::new(),
        );

        assert_eq!(table.column_index("elem", ColumnShape::Scalar), Some(0));
        assert_eq!(table.column_index("pos", ColumnShape::Vector), Some(1));
        assert_eq!(table.column_index("pos", ColumnShape::Scalar), Some(1));
        // Tensor group runs past the last label
        assert_eq!(table.column_index("f", ColumnShape::Tensor), None);
        assert_eq!(table.column_index("missing", ColumnShape::Vector), None);
    }

    #[test]
    fn test_column_values() {
        let table = AsciiTable::parse("1_v 2_v 3_v s\n1 2 3 0.5\n-1 -2 -3 1e-3\n").unwrap();
        let vectors = table.column_values("v", ColumnShape::Vector).unwrap();
        let scalars = table.column_values("s", ColumnShape::Scalar).unwrap();

        assert_eq!(vectors.len(), 2);
        assert!((vectors[1][2] + 3.0).abs() < TOL);
        assert!((scalars[1][0] - 1e-3).abs() < TOL);
    }

    #[test]
    fn test_column_values_reports_bad_numbers() {
        let table = AsciiTable::parse("s\n1.0\nabc\n").unwrap();
        let err = table.column_values("s", ColumnShape::Scalar).unwrap_err();
        assert!(format!("{:#}", err).contains("row 2"));
    }

    #[test]
    fn test_append_columns_and_render() {
        let mut table = AsciiTable::parse("1 header\na b\n1 2\n3 4\n").unwrap();
        table.add_comment("filter v0\t-x".to_string());
        table
            .append_columns(
                labels(&["c"]),
                vec![labels(&["5"]), labels(&["6"])],
            )
            .unwrap();

        assert_eq!(table.render(), "2\theader\nfilter v0\t-x\na\tb\tc\n1\t2\t5\n3\t4\t6\n");
    }

    #[test]
    fn test_append_columns_length_mismatch() {
        let mut table = AsciiTable::parse("a\n1\n2\n").unwrap();
        assert!(table
            .append_columns(labels(&["b"]), vec![labels(&["1"])])
            .is_err());
        assert!(table
            .append_columns(labels(&["b"]), vec![labels(&["1", "2"]), labels(&["3", "4"])])
            .is_err());
    }
}
