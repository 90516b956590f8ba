use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::*;
use std::io;

use super::actions::{
    ApplyResult, apply_action, handle_confirm_key, handle_paste_key, handle_split_key,
    handle_write_prompt_key,
};
use super::alert;
use super::app::{App, Mode, SplitField};
use super::keymap::translate;
use super::ui;

/// Route one key press to whatever currently owns the keyboard.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> ApplyResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return ApplyResult::Quit;
    }

    match app.mode {
        Mode::Normal => {
            app.status_message.clear();
            match translate(&app.keymap, key) {
                Some(action) => apply_action(app, action),
                None => ApplyResult::Continue,
            }
        }
        Mode::Split(_) => {
            handle_split_key(app, key);
            ApplyResult::Continue
        }
        Mode::Paste => handle_paste_key(app, key),
        Mode::WritePrompt => handle_write_prompt_key(app, key),
        Mode::Confirm(_) => handle_confirm_key(app, key),
    }
}

/// Bracketed paste: text goes to whichever input is open.
pub(crate) fn handle_paste(app: &mut App, text: &str) {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    match app.mode {
        Mode::Paste => app.paste.insert_str(&text),
        Mode::WritePrompt => app.write_path.insert_str(text.trim_end_matches('\n')),
        Mode::Split(field) => {
            let line = text.lines().next().unwrap_or("");
            match field {
                SplitField::Delimiter => app.split_delimiter.insert_str(line),
                SplitField::MaxFields => app.split_max.insert_str(line),
            }
        }
        Mode::Normal | Mode::Confirm(_) => {}
    }
}

/// Left click on a data cell selects it. Dialogs keep the mouse out.
pub(crate) fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.mode != Mode::Normal {
        return;
    }

    let [_title, body_area, _status] = ui::split_main_chunks(terminal_area);
    let (grid_area, _help) = ui::split_body(body_area, app.show_help);
    if let Some((col, row)) = ui::grid_cell_at(app, grid_area, mouse.column, mouse.row) {
        app.status_message.clear();
        app.doc.selection.col = col;
        app.goto_row(row);
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let result = match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key)
            }
            Event::Paste(text) => {
                handle_paste(app, &text);
                ApplyResult::Continue
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse_event(app, Rect::new(0, 0, size.width, size.height), mouse);
                ApplyResult::Continue
            }
            _ => ApplyResult::Continue,
        };

        if app.take_alert() {
            alert::ring(&mut io::stdout())?;
        }
        if result == ApplyResult::Quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Confirm;
    use crate::tui::keymap::Keymap;
    use stu_core::{Document, HeaderMode, Selection, SourceFormat};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    fn left_click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Screen position of the first data cell in the grid pane.
    fn first_body_cell_point(app: &App, terminal_area: Rect) -> (u16, u16) {
        let [_title, body_area, _status] = ui::split_main_chunks(terminal_area);
        let (grid_area, _help) = ui::split_body(body_area, app.show_help);
        (
            grid_area.x + 1 + ui::ROW_HEADER_WIDTH + ui::GRID_COLUMN_SPACING,
            grid_area.y + 1 + u16::from(app.doc.grid.has_header()),
        )
    }

    fn app_from(text: &str, keymap: Keymap) -> App {
        let doc = Document::from_text(text, SourceFormat::Csv, HeaderMode::Synthetic).unwrap();
        App::new(doc, keymap)
    }

    #[test]
    fn normal_keys_drive_the_table() {
        let mut app = app_from("a,b\n", Keymap::Default);
        handle_key(&mut app, key('R'));
        assert_eq!(app.doc.grid.row(1).unwrap(), ["b", "a"]);
        handle_key(&mut app, key('L'));
        assert_eq!(app.doc.grid.row(1).unwrap(), ["a", "b"]);
        handle_key(&mut app, key('H'));
        assert!(!app.doc.grid.has_header());
        handle_key(&mut app, key('d'));
        assert_eq!(app.mode, Mode::Confirm(Confirm::DeleteColumn));
        handle_key(&mut app, key('y'));
        assert_eq!(app.doc.grid.col_count(), 1);
    }

    #[test]
    fn vim_keys_drive_the_table() {
        let mut app = app_from("a,b\n", Keymap::Vim);
        handle_key(&mut app, key('>'));
        assert_eq!(app.doc.grid.row(1).unwrap(), ["b", "a"]);
        handle_key(&mut app, key('S'));
        assert_eq!(app.mode, Mode::Split(SplitField::Delimiter));
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app_from("a\n", Keymap::Default);
        app.open_split();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut app, ctrl_c), ApplyResult::Quit);
    }

    #[test]
    fn edge_swap_sets_alert() {
        let mut app = app_from("a,b\n", Keymap::Default);
        handle_key(&mut app, key('L'));
        assert!(app.take_alert());
    }

    #[test]
    fn bracketed_paste_fills_paste_dialog() {
        let mut app = App::with_paste(Keymap::Default, HeaderMode::Synthetic);
        handle_paste(&mut app, "10\r\n20\r\n30");
        assert_eq!(app.paste.text, "10\n20\n30");
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        handle_key(&mut app, ctrl_s);
        assert_eq!(app.doc.to_csv().unwrap(), b"10\n20\n30\n");
    }

    #[test]
    fn paste_ignored_in_table_view() {
        let mut app = app_from("a\n", Keymap::Default);
        handle_paste(&mut app, "junk");
        assert_eq!(app.doc.grid.row(1).unwrap(), ["a"]);
    }

    #[test]
    fn handle_mouse_event_selects_clicked_cell() {
        let mut app = app_from("a,b\nc,d\n", Keymap::Default);
        let terminal_area = Rect::new(0, 0, 80, 24);
        let (x, y) = first_body_cell_point(&app, terminal_area);
        let second_col = x + app.column_width(0) as u16 + ui::GRID_COLUMN_SPACING;

        handle_mouse_event(&mut app, terminal_area, left_click(second_col, y + 1));

        assert_eq!(app.doc.selection, Selection::new(2, 1));
    }

    #[test]
    fn handle_mouse_event_ignores_header_and_other_buttons() {
        let mut app = app_from("a,b\nc,d\n", Keymap::Default);
        let terminal_area = Rect::new(0, 0, 80, 24);
        let (x, y) = first_body_cell_point(&app, terminal_area);

        handle_mouse_event(&mut app, terminal_area, left_click(x, y - 1));
        assert_eq!(app.doc.selection, Selection::new(1, 0));

        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: x,
            row: y + 1,
            modifiers: KeyModifiers::empty(),
        };
        handle_mouse_event(&mut app, terminal_area, right_click);
        assert_eq!(app.doc.selection, Selection::new(1, 0));
    }

    #[test]
    fn handle_mouse_event_ignores_clicks_with_dialog_open() {
        let mut app = app_from("a,b\nc,d\n", Keymap::Default);
        app.open_split();
        let terminal_area = Rect::new(0, 0, 80, 24);
        let (x, y) = first_body_cell_point(&app, terminal_area);

        handle_mouse_event(&mut app, terminal_area, left_click(x, y + 1));

        assert_eq!(app.doc.selection, Selection::new(1, 0));
        assert_eq!(app.mode, Mode::Split(SplitField::Delimiter));
    }

    #[test]
    fn handle_mouse_event_follows_scrolled_viewport() {
        let text: String = (0..50).map(|i| format!("{}\n", i)).collect();
        let mut app = app_from(&text, Keymap::Default);
        app.goto_last_row();
        let terminal_area = Rect::new(0, 0, 80, 24);
        let (x, y) = first_body_cell_point(&app, terminal_area);
        let top = app.viewport_row;
        assert!(top > 1);

        handle_mouse_event(&mut app, terminal_area, left_click(x, y));

        assert_eq!(app.doc.selection, Selection::new(top, 0));
    }
}
