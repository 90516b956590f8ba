use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Available keybinding schemes.
///
/// STU ships two schemes:
/// - [`Default`](Keymap::Default): the classic single-letter commands
///   (`s` split, `H` header, `L`/`R` move column, `d` delete, `w` write, `q` quit)
/// - [`Vim`](Keymap::Vim): hjkl-first bindings (`<`/`>` move column, `x` delete, `S` split, `t` header)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Keymap {
    /// Classic STU bindings.
    Default,
    /// Vim-flavoured bindings.
    Vim,
    /// Custom keymap loaded from user config.
    Custom(CustomKeymap),
}

impl Keymap {
    pub fn name(&self) -> &str {
        match self {
            Keymap::Default => "default",
            Keymap::Vim => "vim",
            Keymap::Custom(custom) => &custom.name,
        }
    }

    pub fn status_hint(&self) -> String {
        match self {
            Keymap::Default => {
                "s:split  H:header  L/R:move col  d:delete  w:write  q:quit  ?:help".to_string()
            }
            Keymap::Vim => {
                "hjkl:move  S:split  t:header  </>:move col  x:delete  w:write  q:quit".to_string()
            }
            Keymap::Custom(custom) => {
                format!("custom keymap: {}  ?:help for bindings", custom.name)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomKeymap {
    pub name: String,
    pub description: Option<String>,
    pub bindings: Vec<Binding>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub combo: KeyCombo,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    fn matches(&self, key: KeyEvent) -> bool {
        if self.code != key.code {
            return false;
        }
        if self.modifiers.is_empty() {
            return true;
        }
        key.modifiers.contains(self.modifiers)
    }

    pub fn display(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }
        let key = match self.code {
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            _ => "Unknown".to_string(),
        };
        if parts.is_empty() {
            key
        } else {
            format!("{}-{}", parts.join("-"), key)
        }
    }
}

impl CustomKeymap {
    /// Modified combos win over bare keys so `C-s` is not shadowed by `s`.
    pub(crate) fn translate(&self, key: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .filter(|binding| !binding.combo.modifiers.is_empty())
            .find(|binding| binding.combo.matches(key))
            .or_else(|| {
                self.bindings
                    .iter()
                    .filter(|binding| binding.combo.modifiers.is_empty())
                    .find(|binding| binding.combo.matches(key))
            })
            .map(|binding| binding.action.clone())
    }
}

/// Actions that can be triggered by key presses in the table view.
///
/// The keymap translates key events into actions, which are then applied to
/// the application state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move cursor by (dx, dy).
    Move(i32, i32),
    /// Page up (-1) or down (+1).
    Page(i32),
    /// Jump to first column.
    HomeCol,
    /// Jump to last column.
    EndCol,
    /// Jump to first data row.
    GotoFirst,
    /// Jump to last row.
    GotoLast,

    /// Swap the selected column with its left neighbour.
    SwapLeft,
    /// Swap the selected column with its right neighbour.
    SwapRight,
    /// Add or remove the header row.
    ToggleHeader,
    /// Open the split dialog.
    OpenSplit,
    /// Ask to delete the selected column.
    DeleteColumn,
    /// Write CSV and exit.
    Write,
    /// Ask to quit.
    Quit,
    /// Show or hide the help pane.
    ToggleHelp,
}
