//! Keymap translation layer.
//!
//! This keeps key handling separate from app behavior. Only the table view
//! goes through the keymap; dialogs read keys directly.

mod defaults;
mod parse;
mod types;

pub use parse::load_keymap;
pub use types::{Action, Binding, CustomKeymap, KeyCombo, Keymap};

use crossterm::event::KeyEvent;

/// Translate a key event to an action based on the current keymap.
///
/// Returns `None` if the key has no binding.
pub fn translate(keymap: &Keymap, key: KeyEvent) -> Option<Action> {
    match keymap {
        Keymap::Default => defaults::translate_default(key),
        Keymap::Vim => defaults::translate_vim(key),
        Keymap::Custom(custom) => custom.translate(key),
    }
}
