use crate::tui::keymap::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys shared by every built-in scheme.
fn translate_common(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up => Some(Action::Move(0, -1)),
        KeyCode::Down => Some(Action::Move(0, 1)),
        KeyCode::Left => Some(Action::Move(-1, 0)),
        KeyCode::Right => Some(Action::Move(1, 0)),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Action::Move(-1, 0)),
        KeyCode::Tab => Some(Action::Move(1, 0)),
        KeyCode::BackTab => Some(Action::Move(-1, 0)),

        KeyCode::PageUp => Some(Action::Page(-1)),
        KeyCode::PageDown => Some(Action::Page(1)),
        KeyCode::Home if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::GotoFirst)
        }
        KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::GotoLast),
        KeyCode::Home => Some(Action::HomeCol),
        KeyCode::End => Some(Action::EndCol),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

pub(crate) fn translate_default(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('s') => Some(Action::OpenSplit),
        KeyCode::Char('H') => Some(Action::ToggleHeader),
        KeyCode::Char('L') => Some(Action::SwapLeft),
        KeyCode::Char('R') => Some(Action::SwapRight),
        KeyCode::Char('d') => Some(Action::DeleteColumn),
        KeyCode::Char('w') => Some(Action::Write),
        KeyCode::Char('q') => Some(Action::Quit),

        KeyCode::Char('k') => Some(Action::Move(0, -1)),
        KeyCode::Char('j') => Some(Action::Move(0, 1)),
        KeyCode::Char('h') => Some(Action::Move(-1, 0)),
        KeyCode::Char('l') => Some(Action::Move(1, 0)),
        _ => None,
    };
    action.or_else(|| translate_common(key))
}

pub(crate) fn translate_vim(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('k') => Some(Action::Move(0, -1)),
        KeyCode::Char('j') => Some(Action::Move(0, 1)),
        KeyCode::Char('h') => Some(Action::Move(-1, 0)),
        KeyCode::Char('l') => Some(Action::Move(1, 0)),
        KeyCode::Char('0') | KeyCode::Char('^') => Some(Action::HomeCol),
        KeyCode::Char('$') => Some(Action::EndCol),
        KeyCode::Char('g') => Some(Action::GotoFirst),
        KeyCode::Char('G') => Some(Action::GotoLast),

        KeyCode::Char('S') => Some(Action::OpenSplit),
        KeyCode::Char('t') => Some(Action::ToggleHeader),
        KeyCode::Char('<') => Some(Action::SwapLeft),
        KeyCode::Char('>') => Some(Action::SwapRight),
        KeyCode::Char('x') | KeyCode::Delete => Some(Action::DeleteColumn),
        KeyCode::Char('w') => Some(Action::Write),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    };
    action.or_else(|| translate_common(key))
}
