//! sumsheet_engine - Batch sum-formula spreadsheet engine.
//!
//! A sheet is a dense grid of cells holding either integer literals or
//! additive formulas over other cells ("=A1+B2"). Construction parses
//! every cell, resolves references to coordinates, and rejects cycles;
//! one compute pass then resolves every value with memoization.

pub mod engine;
pub mod error;

pub use engine::{
    COLUMN_COUNT, Cell, CellKind, CellRef, ColumnCodec, ParsedCell, Sheet, detect_cycle,
    parse_cell,
};
pub use error::{Result, SheetError};

#[cfg(test)]
mod tests {
    use crate::engine::*;
    use crate::error::SheetError;

    fn build(rows: &[&[&str]]) -> Result<Sheet, SheetError> {
        let codec = ColumnCodec::new();
        let matrix: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect();
        Sheet::new(&codec, &matrix)
    }

    #[test]
    fn test_codec_single_letters() {
        let codec = ColumnCodec::new();
        assert_eq!(codec.index("A"), Some(1));
        assert_eq!(codec.index("B"), Some(2));
        assert_eq!(codec.index("Z"), Some(26));
    }

    #[test]
    fn test_codec_multi_letters() {
        let codec = ColumnCodec::new();
        assert_eq!(codec.index("AA"), Some(27));
        assert_eq!(codec.index("AZ"), Some(52));
        assert_eq!(codec.index("BA"), Some(53));
        assert_eq!(codec.index("ZZ"), Some(702));
        assert_eq!(codec.index("AAA"), Some(703));
        assert_eq!(codec.index("ZZZ"), Some(COLUMN_COUNT));
    }

    #[test]
    fn test_codec_rejects_outside_domain() {
        let codec = ColumnCodec::new();
        assert_eq!(codec.index(""), None);
        assert_eq!(codec.index("a"), None);
        assert_eq!(codec.index("AAAA"), None);
        assert_eq!(codec.name(0), None);
        assert_eq!(codec.name(COLUMN_COUNT + 1), None);
    }

    #[test]
    fn test_codec_is_a_bijection() {
        let codec = ColumnCodec::new();
        for index in 1..=COLUMN_COUNT {
            let name = codec.name(index).unwrap();
            assert_eq!(codec.index(name), Some(index), "round-trip of {name}");
        }
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!(parse_cell("0"), Ok(ParsedCell::Literal(0)));
        assert_eq!(parse_cell("42"), Ok(ParsedCell::Literal(42)));
        assert_eq!(parse_cell("999999"), Ok(ParsedCell::Literal(999_999)));
    }

    #[test]
    fn test_parse_literal_leading_zeros() {
        assert_eq!(parse_cell("007"), Ok(ParsedCell::Literal(7)));
        assert_eq!(parse_cell("000"), Ok(ParsedCell::Literal(0)));
    }

    #[test]
    fn test_parse_formula_single_reference() {
        assert_eq!(
            parse_cell("=A1"),
            Ok(ParsedCell::Formula(vec!["A1".to_string()]))
        );
    }

    #[test]
    fn test_parse_formula_preserves_source_order() {
        let parsed = parse_cell("=C3+A1+B2").unwrap();
        assert_eq!(
            parsed,
            ParsedCell::Formula(vec!["C3".into(), "A1".into(), "B2".into()])
        );
    }

    #[test]
    fn test_parse_formula_repeated_reference_kept() {
        let parsed = parse_cell("=A1+A1").unwrap();
        assert_eq!(parsed, ParsedCell::Formula(vec!["A1".into(), "A1".into()]));
    }

    #[test]
    fn test_parse_malformed() {
        for text in [
            "", "=", "A1", "=A1+", "=+A1", "1+2", "=a1", "-1", "= A1", "=A1 ", "=ABCD1", "=A1234",
            "=A1-B1",
        ] {
            assert_eq!(
                parse_cell(text),
                Err(SheetError::MalformedCell {
                    text: text.to_string()
                }),
                "expected {text:?} to be malformed"
            );
        }
    }

    #[test]
    fn test_parse_overlong_literal_is_malformed() {
        let text = "9".repeat(30);
        assert_eq!(
            parse_cell(&text),
            Err(SheetError::MalformedCell { text: text.clone() })
        );
    }

    #[test]
    fn test_resolve_in_bounds() {
        let codec = ColumnCodec::new();
        let sheet = build(&[&["1", "2"], &["3", "4"]]).unwrap();
        assert_eq!(sheet.resolve(&codec, "A1"), Ok(CellRef::new(0, 0)));
        assert_eq!(sheet.resolve(&codec, "B2"), Ok(CellRef::new(1, 1)));
    }

    #[test]
    fn test_resolve_out_of_bounds() {
        let codec = ColumnCodec::new();
        let sheet = build(&[&["1", "2"], &["3", "4"]]).unwrap();
        for reference in ["C1", "A3", "AA1", "B999"] {
            assert_eq!(
                sheet.resolve(&codec, reference),
                Err(SheetError::OutOfBounds {
                    reference: reference.to_string()
                })
            );
        }
    }

    #[test]
    fn test_resolve_row_zero() {
        let codec = ColumnCodec::new();
        let sheet = build(&[&["1"]]).unwrap();
        assert_eq!(
            sheet.resolve(&codec, "A0"),
            Err(SheetError::OutOfBounds {
                reference: "A0".to_string()
            })
        );
    }

    #[test]
    fn test_out_of_bounds_reference_rejected_at_construction() {
        let err = build(&[&["1", "=C1"]]).unwrap_err();
        assert_eq!(
            err,
            SheetError::OutOfBounds {
                reference: "C1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_errors_win_over_resolution_errors() {
        // "=C9" is out of bounds, but the malformed cell is reported
        // because all cells are parsed before any reference resolves.
        let err = build(&[&["=C9", "oops"]]).unwrap_err();
        assert_eq!(
            err,
            SheetError::MalformedCell {
                text: "oops".to_string()
            }
        );
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let err = build(&[&["1", "2"], &["3"]]).unwrap_err();
        assert!(matches!(err, SheetError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let err = build(&[]).unwrap_err();
        assert!(matches!(err, SheetError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_self_reference_rejected() {
        let err = build(&[&["=A1"]]).unwrap_err();
        assert_eq!(
            err,
            SheetError::CircularReference {
                cell: "A1".to_string()
            }
        );
    }

    #[test]
    fn test_longer_cycle_rejected() {
        let err = build(&[&["=B1", "=C1", "=A1"]]).unwrap_err();
        assert!(matches!(err, SheetError::CircularReference { .. }));
    }

    #[test]
    fn test_detect_cycle_none_on_acyclic_chain() {
        let sheet = build(&[&["5", "=A1", "=B1"]]).unwrap();
        assert!(detect_cycle(CellRef::new(0, 2), &sheet).is_none());
        assert!(detect_cycle(CellRef::new(0, 0), &sheet).is_none());
    }

    #[test]
    fn test_diamond_dependency_not_double_counted() {
        // D1 = B1 + C1, both of which are A1; A1 must count once per
        // reference, giving 10, not something path-dependent.
        let mut sheet = build(&[&["5", "=A1", "=A1", "=B1+C1"]]).unwrap();
        sheet.compute();
        assert_eq!(sheet.render(), "5 5 5 10\n");
    }

    #[test]
    fn test_zero_valued_cell_memoized() {
        // A computed 0 must be treated as computed, not re-derived.
        let mut sheet = build(&[&["0", "=A1", "=A1+B1"]]).unwrap();
        sheet.compute();
        assert_eq!(sheet.render(), "0 0 0\n");
        let cell = sheet.get(CellRef::new(0, 1)).unwrap();
        assert_eq!(cell.value, Some(0));
    }

    #[test]
    fn test_forward_reference() {
        // A formula may reference a cell that appears later in row-major
        // order; recursion resolves it first.
        let mut sheet = build(&[&["=B1", "7"]]).unwrap();
        sheet.compute();
        assert_eq!(sheet.render(), "7 7\n");
    }

    #[test]
    fn test_compute_end_to_end() {
        let mut sheet = build(&[&["1", "=A1"], &["3", "=A1+B1"]]).unwrap();
        sheet.compute();
        assert_eq!(sheet.render(), "1 1\n3 4\n");
    }

    #[test]
    fn test_render_is_idempotent_after_compute() {
        let mut sheet = build(&[&["2", "=A1+A1"]]).unwrap();
        sheet.compute();
        let first = sheet.render();
        assert_eq!(sheet.render(), first);
    }

    #[test]
    fn test_render_before_compute_shows_raw_formulas() {
        let sheet = build(&[&["1", "=A1"]]).unwrap();
        assert_eq!(sheet.render(), "1 =A1\n");
    }

    #[test]
    fn test_cell_kinds_and_dependencies() {
        let sheet = build(&[&["12", "=A1+A1"]]).unwrap();

        let literal = sheet.get(CellRef::new(0, 0)).unwrap();
        assert!(matches!(literal.kind, CellKind::Literal(12)));
        assert_eq!(literal.value, Some(12));
        assert!(literal.depends_on().is_empty());

        let formula = sheet.get(CellRef::new(0, 1)).unwrap();
        assert_eq!(formula.raw, "=A1+A1");
        assert_eq!(formula.value, None);
        assert_eq!(formula.depends_on(), &[CellRef::new(0, 0), CellRef::new(0, 0)]);
    }

    #[test]
    fn test_to_a1_round_trip() {
        let codec = ColumnCodec::new();
        assert_eq!(CellRef::new(0, 0).to_a1(&codec), "A1");
        assert_eq!(CellRef::new(9, 26).to_a1(&codec), "AA10");
        assert_eq!(CellRef::new(998, 18_277).to_a1(&codec), "ZZZ999");
    }
}
