use crate::error::{EditError, Result};
use crate::grid::{Grid, Header, Selection};
use crate::label::synthetic_labels;

/// Flip the header row on or off.
///
/// Turning it on inserts a row of letters at index 0. Turning it off drops a
/// synthetic row, or hands promoted labels back to the data. The selection
/// row is shifted so it keeps pointing at the same data cell.
pub fn toggle_header(grid: &mut Grid, selection: &mut Selection) {
    match grid.header() {
        Header::None => {
            let labels = synthetic_labels(grid.col_count());
            grid.rows_mut().insert(0, labels);
            grid.set_header(Header::Synthetic);
            selection.row += 1;
            tracing::debug!(columns = grid.col_count(), "header on");
        }
        Header::Synthetic => {
            grid.rows_mut().remove(0);
            grid.set_header(Header::None);
            selection.row = selection.row.saturating_sub(1);
            tracing::debug!("synthetic header removed");
        }
        Header::Labels => {
            grid.set_header(Header::None);
            tracing::debug!("labels demoted to data");
        }
    }
}

/// Treat the first row as column labels.
pub fn promote_header(grid: &mut Grid) -> Result<()> {
    if grid.row_count() == 0 {
        return Err(EditError::NoDataRows);
    }
    if grid.header() == Header::None {
        grid.set_header(Header::Labels);
    }
    Ok(())
}
