//! File formats STU reads and writes.

pub mod csv;
pub mod text;

pub use csv::{parse_csv, to_csv_bytes, write_csv};
pub use text::split_lines;

use crate::error::Result;
use std::path::Path;
use stu_engine::Grid;

/// How to interpret source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceFormat {
    /// Quote-aware comma separated records.
    Csv,
    /// One single-column row per line.
    #[default]
    Text,
}

impl SourceFormat {
    /// Pick a format from the file extension: `.csv` is CSV, anything else is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::Csv,
            _ => SourceFormat::Text,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(SourceFormat::Csv),
            "text" | "txt" | "plain" => Some(SourceFormat::Text),
            _ => None,
        }
    }
}

/// Build a grid from source text.
pub fn parse_source(content: &str, format: SourceFormat) -> Result<Grid> {
    match format {
        SourceFormat::Csv => Ok(Grid::from_rows(parse_csv(content)?)),
        SourceFormat::Text => {
            let mut grid = Grid::new();
            for line in split_lines(content) {
                grid.push_row(vec![line])?;
            }
            Ok(grid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("a.csv")), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_path(Path::new("A.CSV")), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_path(Path::new("a.txt")), SourceFormat::Text);
        assert_eq!(SourceFormat::from_path(Path::new("noext")), SourceFormat::Text);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(SourceFormat::parse("CSV"), Some(SourceFormat::Csv));
        assert_eq!(SourceFormat::parse("text"), Some(SourceFormat::Text));
        assert_eq!(SourceFormat::parse("xlsx"), None);
    }

    #[test]
    fn test_parse_source_csv_pads() {
        let grid = parse_source("a,b,c\nd\n", SourceFormat::Csv).unwrap();
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.row(1).unwrap(), ["d", "", ""]);
    }

    #[test]
    fn test_parse_source_text_single_column() {
        let grid = parse_source("x,y\nz\n", SourceFormat::Text).unwrap();
        assert_eq!(grid.col_count(), 1);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.cell(0, 0), Some("x,y"));
    }
}
