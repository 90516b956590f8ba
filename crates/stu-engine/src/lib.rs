//! stu_engine - Table model and structural editing for STU.

pub mod error;
pub mod grid;
pub mod label;
pub mod ops;

pub use error::{EditError, Result};
pub use grid::{Grid, Header, Selection};
pub use label::col_to_letters;

#[cfg(test)]
mod tests {
    use crate::ops::*;
    use crate::*;

    fn column(cells: &[&str]) -> Grid {
        Grid::from_rows(cells.iter().map(|s| vec![s.to_string()]).collect())
    }

    #[test]
    fn test_header_then_split_then_swap() {
        let mut grid = column(&["ann smith", "bo jones"]);
        let mut sel = Selection::default();

        toggle_header(&mut grid, &mut sel);
        assert_eq!(sel, Selection::new(1, 0));

        split_column(&mut grid, &mut sel, " ", 0).unwrap();
        assert_eq!(grid.header_labels().unwrap(), ["A", "B"]);
        assert_eq!(grid.row(1).unwrap(), ["ann", "smith"]);

        swap_columns(&mut grid, &mut sel, 0, 1).unwrap();
        assert_eq!(grid.row(2).unwrap(), ["jones", "bo"]);
        assert_eq!(grid.header_labels().unwrap(), ["A", "B"]);
        assert_eq!(sel, Selection::new(1, 1));
    }

    #[test]
    fn test_failed_split_leaves_selection() {
        let mut grid = column(&["a|b", "c"]);
        let mut sel = Selection::new(1, 0);
        let before = grid.clone();
        assert!(split_column(&mut grid, &mut sel, "|", 0).is_err());
        assert_eq!(grid, before);
        assert_eq!(sel, Selection::new(1, 0));
    }

    #[test]
    fn test_split_then_delete_keeps_width_uniform() {
        let mut grid = column(&["1:2:3", "4:5:6"]);
        let mut sel = Selection::default();
        split_column(&mut grid, &mut sel, ":", 0).unwrap();
        delete_column(&mut grid, &mut sel, 1).unwrap();
        assert!(grid.rows().all(|r| r.len() == grid.col_count()));
        assert_eq!(grid.row(1).unwrap(), ["4", "6"]);
    }
}
