//! Error types for STU core.

use stu_engine::EditError;
use thiserror::Error;

/// Errors that can occur while loading or saving a table.
///
/// Everything except [`StuError::Edit`] is fatal at startup: the tool has
/// nothing to show without a readable source.
#[derive(Error, Debug)]
pub enum StuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No file path set")]
    NoFilePath,

    #[error(transparent)]
    Edit(#[from] EditError),
}

pub type Result<T> = std::result::Result<T, StuError>;
