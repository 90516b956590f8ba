//! The tabular data model.
//!
//! A [`Grid`] is a dense, rectangular block of text cells. Row 0 may be
//! reserved as a header row; see [`Header`].

use crate::error::{EditError, Result};
use crate::label::synthetic_labels;

/// What occupies row 0, if anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Header {
    /// Row 0 is data.
    #[default]
    None,
    /// Row 0 holds generated column letters (A, B, C, ...).
    Synthetic,
    /// Row 0 holds labels taken from the input's first record.
    Labels,
}

/// Cursor position tracked by the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub row: usize,
    pub col: usize,
}

impl Selection {
    pub fn new(row: usize, col: usize) -> Self {
        Selection { row, col }
    }

    /// Pull the cursor back inside the grid and off the header row.
    pub fn clamp_to(&mut self, grid: &Grid) {
        let first = grid.data_start();
        let last = grid.row_count().saturating_sub(1).max(first);
        self.row = self.row.clamp(first, last);
        self.col = self.col.min(grid.col_count().saturating_sub(1));
    }
}

/// A rectangular grid of text cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
    header: Header,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from possibly ragged rows, padding short rows with empty
    /// cells up to the widest one.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Grid {
            rows,
            width,
            header: Header::None,
        }
    }

    /// Append a row. The first row of an empty grid fixes the width; later
    /// rows must match it.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if self.rows.is_empty() {
            self.width = row.len();
        } else if row.len() != self.width {
            return Err(EditError::RaggedRow {
                row: self.rows.len(),
                width: row.len(),
                expected: self.width,
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.width
    }

    pub fn header(&self) -> Header {
        self.header
    }

    pub fn has_header(&self) -> bool {
        self.header != Header::None
    }

    /// Index of the first data row.
    pub fn data_start(&self) -> usize {
        if self.has_header() { 1 } else { 0 }
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(self.data_start())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// All rows, header included.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Rows that carry data (header excluded).
    pub fn data_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows[self.data_start().min(self.rows.len())..]
            .iter()
            .map(Vec::as_slice)
    }

    pub fn header_labels(&self) -> Option<&[String]> {
        if self.has_header() {
            self.row(0)
        } else {
            None
        }
    }

    /// Header cells are not selectable; everything else in range is.
    pub fn is_selectable(&self, row: usize, col: usize) -> bool {
        row < self.rows.len() && col < self.width && !(self.has_header() && row == 0)
    }

    pub(crate) fn check_col(&self, col: usize) -> Result<()> {
        if col < self.width {
            Ok(())
        } else {
            Err(EditError::ColumnOutOfRange {
                col,
                columns: self.width,
            })
        }
    }

    pub(crate) fn set_header(&mut self, header: Header) {
        self.header = header;
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<String>> {
        &mut self.rows
    }

    pub(crate) fn data_rows_mut(&mut self) -> impl Iterator<Item = &mut Vec<String>> {
        let start = self.data_start().min(self.rows.len());
        self.rows[start..].iter_mut()
    }

    pub(crate) fn insert_columns(&mut self, at: usize, count: usize) {
        for row in &mut self.rows {
            row.splice(at..at, std::iter::repeat_n(String::new(), count));
        }
        self.width += count;
    }

    pub(crate) fn remove_column(&mut self, col: usize) {
        for row in &mut self.rows {
            row.remove(col);
        }
        self.width -= 1;
    }

    /// Rewrite row 0 with letters for every column. Only meaningful while the
    /// header is synthetic.
    pub(crate) fn relabel(&mut self) {
        if self.header != Header::Synthetic {
            return;
        }
        let labels = synthetic_labels(self.width);
        if let Some(first) = self.rows.first_mut() {
            *first = labels;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_rows_pads_to_widest() {
        let grid = Grid::from_rows(vec![strings(&["a"]), strings(&["b", "c", "d"]), vec![]]);
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.row(0), Some(strings(&["a", "", ""]).as_slice()));
        assert_eq!(grid.row(2), Some(strings(&["", "", ""]).as_slice()));
    }

    #[test]
    fn test_push_row_rejects_ragged() {
        let mut grid = Grid::new();
        grid.push_row(strings(&["a", "b"])).unwrap();
        let err = grid.push_row(strings(&["c"])).unwrap_err();
        assert_eq!(
            err,
            EditError::RaggedRow {
                row: 1,
                width: 1,
                expected: 2
            }
        );
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn test_cell_out_of_range() {
        let grid = Grid::from_rows(vec![strings(&["a"])]);
        assert_eq!(grid.cell(0, 0), Some("a"));
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.cell(1, 0), None);
    }

    #[test]
    fn test_selectable_without_header() {
        let grid = Grid::from_rows(vec![strings(&["a", "b"]), strings(&["c", "d"])]);
        assert!(grid.is_selectable(0, 0));
        assert!(grid.is_selectable(1, 1));
        assert!(!grid.is_selectable(2, 0));
        assert!(!grid.is_selectable(0, 2));
    }

    #[test]
    fn test_data_rows_skip_header() {
        let mut grid = Grid::from_rows(vec![strings(&["h"]), strings(&["x"])]);
        grid.set_header(Header::Labels);
        let data: Vec<_> = grid.data_rows().collect();
        assert_eq!(data, vec![strings(&["x"]).as_slice()]);
        assert!(!grid.is_selectable(0, 0));
        assert_eq!(grid.data_row_count(), 1);
    }

    #[test]
    fn test_selection_clamp_skips_header() {
        let mut grid = Grid::from_rows(vec![strings(&["A", "B"]), strings(&["1", "2"])]);
        grid.set_header(Header::Synthetic);
        let mut sel = Selection::new(0, 5);
        sel.clamp_to(&grid);
        assert_eq!(sel, Selection::new(1, 1));
    }

    #[test]
    fn test_insert_and_remove_columns() {
        let mut grid = Grid::from_rows(vec![strings(&["a", "b"])]);
        grid.insert_columns(1, 2);
        assert_eq!(grid.row(0), Some(strings(&["a", "", "", "b"]).as_slice()));
        grid.remove_column(0);
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.row(0), Some(strings(&["", "", "b"]).as_slice()));
    }
}
