use crate::error::{EditError, Result};
use crate::grid::{Grid, Selection};

/// Remove a column from every row, header included.
pub fn delete_column(grid: &mut Grid, selection: &mut Selection, col: usize) -> Result<()> {
    grid.check_col(col)?;
    if grid.col_count() == 1 {
        return Err(EditError::LastColumn);
    }

    grid.remove_column(col);
    grid.relabel();
    selection.col = selection.col.min(grid.col_count() - 1);
    tracing::debug!(col, "deleted column");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{promote_header, toggle_header};

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_delete_relabels_synthetic_header() {
        let mut g = Grid::from_rows(vec![row(&["1", "2", "3"])]);
        let mut sel = Selection::new(0, 2);
        toggle_header(&mut g, &mut sel);
        delete_column(&mut g, &mut sel, 0).unwrap();
        assert_eq!(g.row(0).unwrap(), ["A", "B"]);
        assert_eq!(g.row(1).unwrap(), ["2", "3"]);
        assert_eq!(sel.col, 1);
    }

    #[test]
    fn test_delete_drops_label() {
        let mut g = Grid::from_rows(vec![row(&["id", "name"]), row(&["1", "bob"])]);
        promote_header(&mut g).unwrap();
        let mut sel = Selection::new(1, 0);
        delete_column(&mut g, &mut sel, 0).unwrap();
        assert_eq!(g.row(0).unwrap(), ["name"]);
        assert_eq!(g.row(1).unwrap(), ["bob"]);
    }

    #[test]
    fn test_delete_last_column_rejected() {
        let mut g = Grid::from_rows(vec![row(&["only"])]);
        let mut sel = Selection::default();
        assert_eq!(delete_column(&mut g, &mut sel, 0), Err(EditError::LastColumn));
        assert_eq!(g.col_count(), 1);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut g = Grid::from_rows(vec![row(&["a", "b"])]);
        let mut sel = Selection::default();
        assert_eq!(
            delete_column(&mut g, &mut sel, 3),
            Err(EditError::ColumnOutOfRange { col: 3, columns: 2 })
        );
    }
}
