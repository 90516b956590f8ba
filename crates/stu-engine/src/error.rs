//! Error types for STU editing operations.
//!
//! Every variant is recoverable: the operation that produced it has left the
//! grid untouched, so callers can simply report it and carry on.

use thiserror::Error;

/// Rejections produced by the editing engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Split underflow at row {row}: got {fields} field(s), expected {expected}")]
    SplitUnderflow {
        row: usize,
        fields: usize,
        expected: usize,
    },

    #[error("Split delimiter is empty")]
    EmptyDelimiter,

    #[error("No data rows")]
    NoDataRows,

    #[error("Column {col} out of range ({columns} columns)")]
    ColumnOutOfRange { col: usize, columns: usize },

    #[error("Cannot delete the only column")]
    LastColumn,

    #[error("Row {row} has {width} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, EditError>;
