//! stu-core - UI-agnostic document model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{Document, HeaderMode, SplitSettings};
pub use error::{Result, StuError};
pub use storage::SourceFormat;

pub use stu_engine::{EditError, Grid, Header, Selection};
