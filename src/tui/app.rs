//! Application state and logic.
//!
//! [`App`] wraps a [`Document`] with everything the terminal front end needs:
//! the current [`Mode`] (table view or one of the dialogs), the dialog input
//! buffers, the viewport, and a pending alert for the input loop to ring.

use std::path::PathBuf;

use stu_core::{Document, HeaderMode, StuError};

use super::keymap::Keymap;

const MIN_COL_WIDTH: usize = 3;
const MAX_COL_WIDTH: usize = 30;

/// Which question the confirmation dialog is asking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirm {
    Quit,
    DeleteColumn,
}

/// Which field of the split dialog has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitField {
    #[default]
    Delimiter,
    MaxFields,
}

impl SplitField {
    pub fn toggle(self) -> Self {
        match self {
            SplitField::Delimiter => SplitField::MaxFields,
            SplitField::MaxFields => SplitField::Delimiter,
        }
    }
}

/// What the keyboard is currently driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The table view; keys go through the keymap.
    Normal,
    /// The split dialog.
    Split(SplitField),
    /// The paste-entry dialog shown when no file was given.
    Paste,
    /// Asking where to write the CSV.
    WritePrompt,
    /// Waiting for y/n.
    Confirm(Confirm),
}

/// A single text buffer with a byte-offset cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        TextInput { text, cursor }
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

pub struct App {
    /// The table and its selection
    pub doc: Document,
    /// Current mode
    pub mode: Mode,
    /// Active keymap
    pub keymap: Keymap,
    /// Header handling for text accepted from the paste dialog
    pub header_mode: HeaderMode,
    /// Status message to display
    pub status_message: String,
    /// Set when the terminal bell should ring after this event
    pub alert_pending: bool,
    /// Whether the help pane is shown
    pub show_help: bool,
    /// Viewport offset (first data row shown)
    pub viewport_row: usize,
    /// Viewport offset (first column shown)
    pub viewport_col: usize,
    /// Number of visible data rows
    pub visible_rows: usize,
    /// Number of visible columns
    pub visible_cols: usize,
    /// Split dialog: string to split on
    pub split_delimiter: TextInput,
    /// Split dialog: maximum fields
    pub split_max: TextInput,
    /// Paste dialog buffer
    pub paste: TextInput,
    /// Write-destination prompt buffer
    pub write_path: TextInput,
}

impl App {
    /// Create an app around an already loaded document.
    pub fn new(doc: Document, keymap: Keymap) -> Self {
        let mut app = App {
            doc,
            mode: Mode::Normal,
            keymap,
            header_mode: HeaderMode::default(),
            status_message: String::new(),
            alert_pending: false,
            show_help: true,
            viewport_row: 0,
            viewport_col: 0,
            visible_rows: 20,
            visible_cols: 8,
            split_delimiter: TextInput::default(),
            split_max: TextInput::default(),
            paste: TextInput::default(),
            write_path: TextInput::default(),
        };
        app.update_viewport();
        app
    }

    /// Start in the paste dialog with nothing loaded.
    pub fn with_paste(keymap: Keymap, header_mode: HeaderMode) -> Self {
        let mut app = Self::new(Document::new(), keymap);
        app.header_mode = header_mode;
        app.mode = Mode::Paste;
        app
    }

    /// Report a rejected action: set the status line and queue the bell.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.alert_pending = true;
    }

    /// Whether the bell should ring. Clears the flag.
    pub fn take_alert(&mut self) -> bool {
        std::mem::take(&mut self.alert_pending)
    }

    fn report_edit<E: std::fmt::Display>(&mut self, err: E) {
        tracing::warn!(error = %err, "edit rejected");
        self.alert(format!("Error: {}", err));
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.doc.move_selection(dx, dy);
        self.update_viewport();
    }

    pub fn page(&mut self, dir: i32) {
        let delta = self.visible_rows.max(1) as i32 * dir;
        self.move_cursor(0, delta);
    }

    pub fn goto_col(&mut self, col: usize) {
        self.doc.selection.col = col;
        self.doc.selection.clamp_to(&self.doc.grid);
        self.update_viewport();
    }

    pub fn goto_row(&mut self, row: usize) {
        self.doc.selection.row = row;
        self.doc.selection.clamp_to(&self.doc.grid);
        self.update_viewport();
    }

    pub fn goto_last_col(&mut self) {
        self.goto_col(self.doc.grid.col_count().saturating_sub(1));
    }

    pub fn goto_last_row(&mut self) {
        self.goto_row(self.doc.grid.row_count().saturating_sub(1));
    }

    pub fn swap_left(&mut self) {
        let col = self.doc.selection.col;
        if col == 0 {
            self.alert("Already at the first column");
            return;
        }
        match self.doc.swap_columns(col - 1, col) {
            Ok(()) => self.status_message.clear(),
            Err(err) => self.report_edit(err),
        }
        self.update_viewport();
    }

    pub fn swap_right(&mut self) {
        let col = self.doc.selection.col;
        if col + 1 >= self.doc.grid.col_count() {
            self.alert("Already at the last column");
            return;
        }
        match self.doc.swap_columns(col, col + 1) {
            Ok(()) => self.status_message.clear(),
            Err(err) => self.report_edit(err),
        }
        self.update_viewport();
    }

    pub fn toggle_header(&mut self) {
        self.doc.toggle_header();
        self.status_message = if self.doc.grid.has_header() {
            "Header on".to_string()
        } else {
            "Header off".to_string()
        };
        self.update_viewport();
    }

    pub fn open_split(&mut self) {
        if self.doc.grid.col_count() == 0 {
            self.alert("Nothing to split");
            return;
        }
        self.split_delimiter = TextInput::with_text(self.doc.split.delimiter.clone());
        self.split_max = TextInput::with_text(self.doc.split.max_fields.to_string());
        self.mode = Mode::Split(SplitField::Delimiter);
    }

    /// Run the split with the dialog's values.
    ///
    /// An unparsable field cap keeps the dialog open. Any other outcome
    /// returns to the table.
    pub fn submit_split(&mut self) {
        let max_fields = match self.split_max.text.trim().parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                self.alert("Maximum fields must be a whole number (0 to disable)");
                self.mode = Mode::Split(SplitField::MaxFields);
                return;
            }
        };
        self.mode = Mode::Normal;
        let delimiter = self.split_delimiter.text.clone();
        match self.doc.split_with(&delimiter, max_fields) {
            Ok(()) => {
                self.status_message = format!(
                    "Split on {:?}: {} columns",
                    delimiter,
                    self.doc.grid.col_count()
                );
            }
            Err(err) => self.report_edit(err),
        }
        self.update_viewport();
    }

    pub fn request_delete(&mut self) {
        if self.doc.grid.col_count() == 0 {
            self.alert("Nothing to delete");
            return;
        }
        self.mode = Mode::Confirm(Confirm::DeleteColumn);
    }

    pub fn request_quit(&mut self) {
        self.mode = Mode::Confirm(Confirm::Quit);
    }

    /// Prompt text for the confirmation dialog.
    pub fn confirm_prompt(&self, confirm: Confirm) -> String {
        match confirm {
            Confirm::Quit if self.doc.modified => {
                "Discard changes and quit? (y/n)".to_string()
            }
            Confirm::Quit => "Really quit? (y/n)".to_string(),
            Confirm::DeleteColumn => format!(
                "Delete column {}? (y/n)",
                self.doc.column_label(self.doc.selection.col)
            ),
        }
    }

    /// Answer the confirmation dialog. Returns true when the app should exit.
    pub fn answer_confirm(&mut self, yes: bool) -> bool {
        let Mode::Confirm(confirm) = self.mode else {
            return false;
        };
        self.mode = Mode::Normal;
        if !yes {
            self.status_message.clear();
            return false;
        }
        match confirm {
            Confirm::Quit => true,
            Confirm::DeleteColumn => {
                let label = self.doc.column_label(self.doc.selection.col);
                match self.doc.delete_selected_column() {
                    Ok(()) => self.status_message = format!("Deleted column {}", label),
                    Err(err) => self.report_edit(err),
                }
                self.update_viewport();
                false
            }
        }
    }

    /// Write CSV to the document's file. Returns true when the app should exit.
    ///
    /// Without a file path the write prompt opens instead.
    pub fn write(&mut self) -> bool {
        match self.doc.save() {
            Ok(path) => {
                tracing::info!(path = %path.display(), "wrote csv, exiting");
                true
            }
            Err(StuError::NoFilePath) => {
                self.write_path.clear();
                self.mode = Mode::WritePrompt;
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "write failed");
                self.alert(format!("Error: {}", err));
                false
            }
        }
    }

    /// Write to the path typed in the prompt. Returns true when the app should exit.
    pub fn submit_write_path(&mut self) -> bool {
        let raw = self.write_path.text.trim().to_string();
        if raw.is_empty() {
            self.alert("No file name given");
            return false;
        }
        self.mode = Mode::Normal;
        match self.doc.save_as(&PathBuf::from(&raw)) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(error = %err, path = %raw, "write failed");
                self.alert(format!("Error: {}", err));
                false
            }
        }
    }

    /// Load the pasted text as the table.
    pub fn submit_paste(&mut self) {
        if self.paste.text.trim().is_empty() {
            self.alert("Nothing pasted");
            return;
        }
        match Document::from_pasted(&self.paste.text, self.header_mode) {
            Ok(doc) => {
                self.doc = doc;
                self.paste.clear();
                self.mode = Mode::Normal;
                self.status_message = format!("Loaded {} rows", self.doc.grid.data_row_count());
                self.viewport_row = 0;
                self.viewport_col = 0;
                self.update_viewport();
            }
            Err(err) => {
                tracing::warn!(error = %err, "paste rejected");
                self.alert(format!("Error: {}", err));
            }
        }
    }

    /// Whether anything has been loaded into the table yet.
    pub fn has_table(&self) -> bool {
        self.doc.grid.row_count() > 0
    }

    /// Display width for a column: the widest cell, within limits.
    pub fn column_width(&self, col: usize) -> usize {
        self.doc
            .grid
            .rows()
            .filter_map(|row| row.get(col))
            .map(|cell| cell.lines().map(|l| l.chars().count()).max().unwrap_or(0))
            .max()
            .unwrap_or(0)
            .clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
    }

    /// Scroll so the selection stays visible.
    pub fn update_viewport(&mut self) {
        let sel = self.doc.selection;
        let first = self.doc.grid.data_start();
        let rows = self.visible_rows.max(1);
        let cols = self.visible_cols.max(1);

        self.viewport_row = self.viewport_row.max(first);
        if sel.row < self.viewport_row {
            self.viewport_row = sel.row.max(first);
        } else if sel.row >= self.viewport_row + rows {
            self.viewport_row = sel.row + 1 - rows;
        }

        if sel.col < self.viewport_col {
            self.viewport_col = sel.col;
        } else if sel.col >= self.viewport_col + cols {
            self.viewport_col = sel.col + 1 - cols;
        }
    }
}
