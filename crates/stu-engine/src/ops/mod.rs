//! Structural editing operations.
//!
//! Each operation takes the grid and the caller's selection cursor, validates
//! everything up front, and only then mutates. A returned [`EditError`]
//! means nothing changed.
//!
//! [`EditError`]: crate::error::EditError

mod delete;
mod header;
mod split;
mod swap;

pub use delete::delete_column;
pub use header::{promote_header, toggle_header};
pub use split::{split_column, split_fields};
pub use swap::swap_columns;
