use super::Document;
use stu_engine::{Result, ops};

impl Document {
    /// Swap two columns; the selection follows the cell it was on.
    pub fn swap_columns(&mut self, left: usize, right: usize) -> Result<()> {
        ops::swap_columns(&mut self.grid, &mut self.selection, left, right)?;
        self.modified = true;
        Ok(())
    }

    pub fn toggle_header(&mut self) {
        ops::toggle_header(&mut self.grid, &mut self.selection);
        self.selection.clamp_to(&self.grid);
        self.modified = true;
    }

    /// Store new split settings and split the selected column with them.
    pub fn split_with(&mut self, delimiter: &str, max_fields: usize) -> Result<()> {
        self.split.delimiter = delimiter.to_string();
        self.split.max_fields = max_fields;
        self.split_selected()
    }

    /// Split the selected column using the stored settings.
    pub fn split_selected(&mut self) -> Result<()> {
        ops::split_column(
            &mut self.grid,
            &mut self.selection,
            &self.split.delimiter,
            self.split.max_fields,
        )?;
        self.modified = true;
        Ok(())
    }

    pub fn delete_selected_column(&mut self) -> Result<()> {
        let col = self.selection.col;
        ops::delete_column(&mut self.grid, &mut self.selection, col)?;
        self.modified = true;
        Ok(())
    }

    /// Move the cursor by (dx, dy), staying on selectable cells.
    pub fn move_selection(&mut self, dx: i32, dy: i32) {
        let row = (self.selection.row as i64 + dy as i64).max(0) as usize;
        let col = (self.selection.col as i64 + dx as i64).max(0) as usize;
        self.selection.row = row;
        self.selection.col = col;
        self.selection.clamp_to(&self.grid);
    }

    /// Label shown for a column: its header cell, or its letters when there is no header.
    pub fn column_label(&self, col: usize) -> String {
        match self.grid.header_labels().and_then(|labels| labels.get(col)) {
            Some(label) => label.clone(),
            None => stu_engine::col_to_letters(col),
        }
    }
}
