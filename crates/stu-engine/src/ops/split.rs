use crate::error::{EditError, Result};
use crate::grid::{Grid, Header, Selection};

/// Split one cell's text. `max_fields == 0` means no limit; otherwise the last
/// field keeps whatever is left unsplit.
pub fn split_fields<'a>(text: &'a str, delimiter: &str, max_fields: usize) -> Vec<&'a str> {
    if max_fields == 0 {
        text.split(delimiter).collect()
    } else {
        text.splitn(max_fields, delimiter).collect()
    }
}

/// Split the selected column of every data row on `delimiter`.
///
/// The field count of the first data row decides how many columns the split
/// produces; every other row must produce the same count. `N - 1` empty
/// columns are inserted at the selected column and the fields are written
/// left to right, so the original column ends up holding the last field.
/// Nothing is written until every row has been split and checked.
pub fn split_column(
    grid: &mut Grid,
    selection: &mut Selection,
    delimiter: &str,
    max_fields: usize,
) -> Result<()> {
    let col = selection.col;
    grid.check_col(col)?;
    if delimiter.is_empty() {
        return Err(EditError::EmptyDelimiter);
    }
    if grid.data_row_count() == 0 {
        return Err(EditError::NoDataRows);
    }

    let first = grid.data_start();
    let mut split_rows: Vec<Vec<String>> = Vec::with_capacity(grid.data_row_count());
    let mut expected = max_fields.max(2);
    for (offset, row) in grid.data_rows().enumerate() {
        let fields = split_fields(&row[col], delimiter, max_fields);
        if offset == 0 && max_fields == 0 {
            expected = fields.len().max(2);
        }
        if fields.len() != expected {
            tracing::warn!(
                row = first + offset,
                fields = fields.len(),
                expected,
                "split rejected"
            );
            return Err(EditError::SplitUnderflow {
                row: first + offset,
                fields: fields.len(),
                expected,
            });
        }
        split_rows.push(fields.into_iter().map(str::to_string).collect());
    }

    let n = expected;
    let source_label = match grid.header() {
        Header::Labels => grid.cell(0, col).map(str::to_string),
        Header::None | Header::Synthetic => None,
    };

    grid.insert_columns(col, n - 1);
    for (row, fields) in grid.data_rows_mut().zip(split_rows) {
        for (i, field) in fields.into_iter().enumerate() {
            row[col + i] = field;
        }
    }

    match (grid.header(), source_label) {
        (Header::Labels, Some(label)) => {
            if let Some(header) = grid.rows_mut().first_mut() {
                for i in 0..n {
                    header[col + i] = format!("{}.{}", label, i + 1);
                }
            }
        }
        (Header::Synthetic, _) => grid.relabel(),
        _ => {}
    }

    selection.col = col;
    tracing::debug!(col, fields = n, delimiter, "split column");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{promote_header, toggle_header};

    fn column(cells: &[&str]) -> Grid {
        Grid::from_rows(cells.iter().map(|s| vec![s.to_string()]).collect())
    }

    #[test]
    fn test_split_fields_unbounded() {
        assert_eq!(split_fields("a,b,c", ",", 0), vec!["a", "b", "c"]);
        assert_eq!(split_fields("abc", ",", 0), vec!["abc"]);
        assert_eq!(split_fields("a,,b", ",", 0), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_fields_bounded_keeps_remainder() {
        assert_eq!(split_fields("2024-01-15", "-", 2), vec!["2024", "01-15"]);
        assert_eq!(split_fields("a::b::c", "::", 3), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_with_labels() {
        let mut g = column(&["X", "a,b,c", "d,e,f"]);
        promote_header(&mut g).unwrap();
        let mut sel = Selection::new(1, 0);
        split_column(&mut g, &mut sel, ",", 0).unwrap();
        assert_eq!(g.col_count(), 3);
        assert_eq!(g.row(0).unwrap(), ["X.1", "X.2", "X.3"]);
        assert_eq!(g.row(1).unwrap(), ["a", "b", "c"]);
        assert_eq!(g.row(2).unwrap(), ["d", "e", "f"]);
        assert_eq!(sel.col, 0);
    }

    #[test]
    fn test_split_with_synthetic_header_relabels() {
        let mut g = Grid::from_rows(vec![
            vec!["k".into(), "1-2".into(), "z".into()],
            vec!["l".into(), "3-4".into(), "y".into()],
        ]);
        let mut sel = Selection::new(0, 1);
        toggle_header(&mut g, &mut sel);
        split_column(&mut g, &mut sel, "-", 0).unwrap();
        assert_eq!(g.row(0).unwrap(), ["A", "B", "C", "D"]);
        assert_eq!(g.row(1).unwrap(), ["k", "1", "2", "z"]);
        assert_eq!(g.row(2).unwrap(), ["l", "3", "4", "y"]);
        assert_eq!(sel, Selection::new(1, 1));
    }

    #[test]
    fn test_split_bounded() {
        let mut g = column(&["2024-01-15"]);
        let mut sel = Selection::default();
        split_column(&mut g, &mut sel, "-", 2).unwrap();
        assert_eq!(g.row(0).unwrap(), ["2024", "01-15"]);
    }

    #[test]
    fn test_split_missing_delimiter_is_noop() {
        let original = column(&["abc", "def"]);
        let mut g = original.clone();
        let mut sel = Selection::default();
        let err = split_column(&mut g, &mut sel, ",", 0).unwrap_err();
        assert_eq!(
            err,
            EditError::SplitUnderflow {
                row: 0,
                fields: 1,
                expected: 2
            }
        );
        assert_eq!(g, original);
    }

    #[test]
    fn test_split_bounded_underflow_on_later_row() {
        let original = column(&["a-b-c", "d-e"]);
        let mut g = original.clone();
        let mut sel = Selection::default();
        let err = split_column(&mut g, &mut sel, "-", 3).unwrap_err();
        assert_eq!(
            err,
            EditError::SplitUnderflow {
                row: 1,
                fields: 2,
                expected: 3
            }
        );
        assert_eq!(g, original);
    }

    #[test]
    fn test_split_divergent_counts_rejected() {
        let original = column(&["a,b", "c,d,e"]);
        let mut g = original.clone();
        let mut sel = Selection::default();
        assert!(matches!(
            split_column(&mut g, &mut sel, ",", 0),
            Err(EditError::SplitUnderflow { row: 1, fields: 3, expected: 2 })
        ));
        assert_eq!(g, original);
    }

    #[test]
    fn test_split_never_touches_header_row() {
        let mut g = column(&["a;b"]);
        let mut sel = Selection::default();
        toggle_header(&mut g, &mut sel);
        split_column(&mut g, &mut sel, ";", 0).unwrap();
        assert_eq!(g.row(0).unwrap(), ["A", "B"]);
        assert_eq!(g.row(1).unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_split_shifts_columns_to_the_right() {
        let mut g = Grid::from_rows(vec![vec!["x y z".into(), "tail".into()]]);
        let mut sel = Selection::default();
        split_column(&mut g, &mut sel, " ", 0).unwrap();
        assert_eq!(g.row(0).unwrap(), ["x", "y", "z", "tail"]);
    }

    #[test]
    fn test_split_rejects_empty_delimiter_and_empty_grid() {
        let mut g = column(&["a"]);
        let mut sel = Selection::default();
        assert_eq!(
            split_column(&mut g, &mut sel, "", 0),
            Err(EditError::EmptyDelimiter)
        );

        let mut g = column(&["only header"]);
        promote_header(&mut g).unwrap();
        assert_eq!(
            split_column(&mut g, &mut sel, ",", 0),
            Err(EditError::NoDataRows)
        );
    }

    #[test]
    fn test_split_max_fields_one_underflows() {
        let mut g = column(&["a,b"]);
        let mut sel = Selection::default();
        assert!(matches!(
            split_column(&mut g, &mut sel, ",", 1),
            Err(EditError::SplitUnderflow { fields: 1, .. })
        ));
    }
}
