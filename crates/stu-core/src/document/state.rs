use crate::storage::SourceFormat;
use std::path::PathBuf;
use stu_engine::{Grid, Selection, ops};

/// What to do with row 0 after ingestion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Add a row of generated letters.
    #[default]
    Synthetic,
    /// Leave every row as data.
    None,
    /// Use the first record as column labels.
    FirstRow,
}

/// Split dialog values, remembered between invocations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitSettings {
    /// String to split on.
    pub delimiter: String,
    /// Maximum fields per row; 0 means unlimited.
    pub max_fields: usize,
}

/// UI-agnostic state for one editing session.
pub struct Document {
    /// The table being edited
    pub grid: Grid,
    /// Cursor position, kept on a selectable cell
    pub selection: Selection,
    /// Last used split settings
    pub split: SplitSettings,
    /// Where the table came from (and where `save` writes)
    pub file_path: Option<PathBuf>,
    /// Format the source was read as
    pub format: SourceFormat,
    /// Whether the grid has been modified
    pub modified: bool,
}

impl Document {
    /// Create an empty document.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Document {
            grid: Grid::new(),
            selection: Selection::default(),
            split: SplitSettings::default(),
            file_path: None,
            format: SourceFormat::default(),
            modified: false,
        }
    }

    /// Wrap an ingested grid and apply the requested header handling.
    pub fn from_grid(grid: Grid, header: HeaderMode) -> Self {
        let mut doc = Document {
            grid,
            ..Self::new()
        };
        match header {
            HeaderMode::Synthetic => ops::toggle_header(&mut doc.grid, &mut doc.selection),
            HeaderMode::FirstRow => {
                // An empty source has no first row to promote.
                let _ = ops::promote_header(&mut doc.grid);
            }
            HeaderMode::None => {}
        }
        doc.selection.clamp_to(&doc.grid);
        doc
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
