use super::{Document, HeaderMode};
use crate::error::{Result, StuError};
use crate::storage::{SourceFormat, parse_source, to_csv_bytes};
use std::path::{Path, PathBuf};

impl Document {
    /// Load a file. The format is guessed from the extension unless given.
    pub fn open(path: &Path, format: Option<SourceFormat>, header: HeaderMode) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let format = format.unwrap_or_else(|| SourceFormat::from_path(path));
        let mut doc = Self::from_text(&content, format, header)?;
        doc.file_path = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            ?format,
            rows = doc.grid.row_count(),
            cols = doc.grid.col_count(),
            "loaded"
        );
        Ok(doc)
    }

    /// Build a document from literal text.
    pub fn from_text(content: &str, format: SourceFormat, header: HeaderMode) -> Result<Self> {
        let grid = parse_source(content, format)?;
        let mut doc = Self::from_grid(grid, header);
        doc.format = format;
        Ok(doc)
    }

    /// Build a document from pasted lines. Same rules as a plain-text file.
    pub fn from_pasted(text: &str, header: HeaderMode) -> Result<Self> {
        Self::from_text(text, SourceFormat::Text, header)
    }

    /// Serialize the data rows as CSV. The header row is left out.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        to_csv_bytes(&self.grid)
    }

    /// Save to the current file path.
    /// Returns the path saved to.
    pub fn save(&mut self) -> Result<PathBuf> {
        let Some(path) = self.file_path.clone() else {
            return Err(StuError::NoFilePath);
        };
        self.write_to(&path)?;
        Ok(path)
    }

    /// Save to `path` and remember it for later saves.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf> {
        self.write_to(path)?;
        self.file_path = Some(path.to_path_buf());
        Ok(path.to_path_buf())
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        let bytes = self.to_csv()?;
        std::fs::write(path, bytes)?;
        self.modified = false;
        tracing::info!(path = %path.display(), rows = self.grid.data_row_count(), "saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stu_engine::Header;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "stu_{}_{}_{:?}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            std::thread::current().id(),
        ) + name)
    }

    struct Cleanup(PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_plain_text_with_header_end_to_end() {
        let doc = Document::from_text("10\n20\n30\n", SourceFormat::Text, HeaderMode::Synthetic)
            .unwrap();
        assert_eq!(doc.grid.row(0).unwrap(), ["A"]);
        assert_eq!(doc.grid.row(1).unwrap(), ["10"]);
        assert_eq!(doc.grid.row(2).unwrap(), ["20"]);
        assert_eq!(doc.grid.row(3).unwrap(), ["30"]);
        assert_eq!(doc.selection.row, 1);
        assert_eq!(doc.to_csv().unwrap(), b"10\n20\n30\n");
    }

    #[test]
    fn test_first_row_labels() {
        let doc = Document::from_text("name,age\nbob,40\n", SourceFormat::Csv, HeaderMode::FirstRow)
            .unwrap();
        assert_eq!(doc.grid.header(), Header::Labels);
        assert_eq!(doc.selection.row, 1);
        assert_eq!(doc.to_csv().unwrap(), b"bob,40\n");
    }

    #[test]
    fn test_first_row_labels_on_empty_source() {
        let doc = Document::from_text("", SourceFormat::Csv, HeaderMode::FirstRow).unwrap();
        assert_eq!(doc.grid.header(), Header::None);
        assert_eq!(doc.grid.row_count(), 0);
        assert_eq!(doc.selection, stu_engine::Selection::default());
        assert!(doc.to_csv().unwrap().is_empty());
    }

    #[test]
    fn test_pasted_text_empty() {
        let doc = Document::from_pasted("", HeaderMode::None).unwrap();
        assert_eq!(doc.grid.row_count(), 0);
        assert!(doc.to_csv().unwrap().is_empty());
    }

    #[test]
    fn test_open_detects_csv_and_saves_back() {
        let path = temp_path(".csv");
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, "a,\"b,c\"\nd,e\n").unwrap();

        let mut doc = Document::open(&path, None, HeaderMode::Synthetic).unwrap();
        assert_eq!(doc.format, SourceFormat::Csv);
        assert_eq!(doc.grid.row(0).unwrap(), ["A", "B"]);
        assert_eq!(doc.grid.cell(1, 1), Some("b,c"));

        doc.modified = true;
        let saved = doc.save().unwrap();
        assert_eq!(saved, path);
        assert!(!doc.modified);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,\"b,c\"\nd,e\n");
    }

    #[test]
    fn test_open_malformed_csv_fails() {
        let path = temp_path(".csv");
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, "a,\"unterminated\n").unwrap();
        let err = Document::open(&path, None, HeaderMode::Synthetic).err().unwrap();
        assert!(matches!(err, StuError::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let path = temp_path(".missing");
        let err = Document::open(&path, None, HeaderMode::None).err().unwrap();
        assert!(matches!(err, StuError::Io(_)));
    }

    #[test]
    fn test_save_without_path() {
        let mut doc = Document::from_pasted("x\n", HeaderMode::None).unwrap();
        assert!(matches!(doc.save(), Err(StuError::NoFilePath)));

        let path = temp_path(".csv");
        let _cleanup = Cleanup(path.clone());
        doc.save_as(&path).unwrap();
        assert_eq!(doc.file_path.as_deref(), Some(path.as_path()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n");
    }

    #[test]
    fn test_forced_text_format_ignores_commas() {
        let path = temp_path(".csv");
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, "a,b\n").unwrap();
        let doc = Document::open(&path, Some(SourceFormat::Text), HeaderMode::None).unwrap();
        assert_eq!(doc.grid.col_count(), 1);
        assert_eq!(doc.grid.cell(0, 0), Some("a,b"));
    }
}
