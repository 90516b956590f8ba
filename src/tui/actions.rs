use crossterm::event::{self, KeyCode, KeyModifiers};

use super::app::{App, Mode, SplitField, TextInput};
use super::keymap::Action;

/// Handle text editing operations on a buffer with UTF-8 aware cursor movement.
///
/// Enter is left to the caller: some buffers take newlines, others submit.
pub(crate) fn handle_text_input(input: &mut TextInput, key: event::KeyEvent) {
    let TextInput { text, cursor } = input;
    match key.code {
        KeyCode::Left => {
            if *cursor > 0 {
                let mut new_pos = *cursor - 1;
                while new_pos > 0 && !text.is_char_boundary(new_pos) {
                    new_pos -= 1;
                }
                *cursor = new_pos;
            }
        }
        KeyCode::Right => {
            if *cursor < text.len() {
                let mut new_pos = *cursor + 1;
                while new_pos < text.len() && !text.is_char_boundary(new_pos) {
                    new_pos += 1;
                }
                *cursor = new_pos;
            }
        }
        KeyCode::Home => {
            *cursor = text[..*cursor].rfind('\n').map_or(0, |i| i + 1);
        }
        KeyCode::End => {
            *cursor = text[*cursor..]
                .find('\n')
                .map_or(text.len(), |i| *cursor + i);
        }
        KeyCode::Backspace | KeyCode::Char('h')
            if key.code == KeyCode::Backspace || key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            if *cursor > 0 {
                let mut del_start = *cursor - 1;
                while del_start > 0 && !text.is_char_boundary(del_start) {
                    del_start -= 1;
                }
                text.drain(del_start..*cursor);
                *cursor = del_start;
            }
        }
        KeyCode::Delete => {
            if *cursor < text.len() {
                let mut del_end = *cursor + 1;
                while del_end < text.len() && !text.is_char_boundary(del_end) {
                    del_end += 1;
                }
                text.drain(*cursor..del_end);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            text.drain(..*cursor);
            *cursor = 0;
        }
        KeyCode::Char(c) => {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                text.insert(*cursor, c);
                *cursor += c.len_utf8();
            }
        }
        _ => {}
    }
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Apply a table-view action to the application state.
///
/// Returns `ApplyResult::Quit` if the application should exit.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    match action {
        Action::Move(dx, dy) => app.move_cursor(dx, dy),
        Action::Page(dir) => app.page(dir),
        Action::HomeCol => app.goto_col(0),
        Action::EndCol => app.goto_last_col(),
        Action::GotoFirst => app.goto_row(0),
        Action::GotoLast => app.goto_last_row(),

        Action::SwapLeft => app.swap_left(),
        Action::SwapRight => app.swap_right(),
        Action::ToggleHeader => app.toggle_header(),
        Action::OpenSplit => app.open_split(),
        Action::DeleteColumn => app.request_delete(),
        Action::Write => {
            if app.write() {
                return ApplyResult::Quit;
            }
        }
        Action::Quit => app.request_quit(),
        Action::ToggleHelp => app.show_help = !app.show_help,
    }
    ApplyResult::Continue
}

/// Keys for the split dialog.
pub fn handle_split_key(app: &mut App, key: event::KeyEvent) {
    let Mode::Split(field) = app.mode else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.status_message.clear();
        }
        KeyCode::Enter => app.submit_split(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.mode = Mode::Split(field.toggle());
        }
        _ => {
            let input = match field {
                SplitField::Delimiter => &mut app.split_delimiter,
                SplitField::MaxFields => &mut app.split_max,
            };
            handle_text_input(input, key);
        }
    }
}

/// Keys for the paste dialog.
///
/// Returns `ApplyResult::Quit` when the dialog is dismissed with nothing loaded.
pub fn handle_paste_key(app: &mut App, key: event::KeyEvent) -> ApplyResult {
    match key.code {
        KeyCode::Esc => {
            if !app.has_table() {
                return ApplyResult::Quit;
            }
            app.mode = Mode::Normal;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_paste();
        }
        KeyCode::Enter => app.paste.insert_str("\n"),
        KeyCode::Tab => app.paste.insert_str("\t"),
        _ => handle_text_input(&mut app.paste, key),
    }
    ApplyResult::Continue
}

/// Keys for the write-destination prompt.
pub fn handle_write_prompt_key(app: &mut App, key: event::KeyEvent) -> ApplyResult {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.status_message = "Write cancelled".to_string();
        }
        KeyCode::Enter => {
            if app.submit_write_path() {
                return ApplyResult::Quit;
            }
        }
        _ => handle_text_input(&mut app.write_path, key),
    }
    ApplyResult::Continue
}

/// Keys for the y/n confirmation dialog.
pub fn handle_confirm_key(app: &mut App, key: event::KeyEvent) -> ApplyResult {
    let quit = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_confirm(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_confirm(false),
        _ => false,
    };
    if quit {
        ApplyResult::Quit
    } else {
        ApplyResult::Continue
    }
}
