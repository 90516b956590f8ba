use crate::error::Result;
use crate::grid::{Grid, Header, Selection};

/// Exchange two columns across every data row.
///
/// Promoted labels travel with their column. Synthetic letters are positional
/// and stay put. The selection follows the cell it was on.
pub fn swap_columns(
    grid: &mut Grid,
    selection: &mut Selection,
    left: usize,
    right: usize,
) -> Result<()> {
    grid.check_col(left)?;
    grid.check_col(right)?;
    if left == right {
        return Ok(());
    }

    let start = match grid.header() {
        Header::Synthetic => 1,
        Header::None | Header::Labels => 0,
    };
    for row in grid.rows_mut().iter_mut().skip(start) {
        row.swap(left, right);
    }

    if selection.col == left {
        selection.col = right;
    } else if selection.col == right {
        selection.col = left;
    }
    tracing::debug!(left, right, "swapped columns");
    Ok(())
}
