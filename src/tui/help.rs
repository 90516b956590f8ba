//! Help text content for the help pane

use super::keymap::{Action, CustomKeymap, Keymap};

/// Get keybinding help text for the current keymap
pub fn get_help_text(keymap: &Keymap) -> Vec<String> {
    match keymap {
        Keymap::Default => vec![
            "Table:",
            "  s            Split column",
            "  H            Toggle header",
            "  L            Move column left",
            "  R            Move column right",
            "  d            Delete column",
            "  w            Write CSV and exit",
            "  q            Quit",
            "",
            "Navigation:",
            "  h/j/k/l      Move left/down/up/right",
            "  Arrow keys   Move cursor",
            "  PageUp/Down  Scroll by page",
            "  Home/End     First/last column",
            "  ?            Toggle this pane",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        Keymap::Vim => vec![
            "Table:",
            "  S            Split column",
            "  t            Toggle header",
            "  <            Move column left",
            "  >            Move column right",
            "  x / Delete   Delete column",
            "  w            Write CSV and exit",
            "  q            Quit",
            "",
            "Navigation:",
            "  h/j/k/l      Move left/down/up/right",
            "  0 / $        First/last column",
            "  g / G        First/last row",
            "  PageUp/Down  Scroll by page",
            "  ?            Toggle this pane",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        Keymap::Custom(custom) => custom_help_text(custom),
    }
}

/// Help text for the dialogs. Dialog keys are the same in every keymap.
pub fn get_dialog_help() -> Vec<String> {
    vec![
        "Dialogs:",
        "  Tab          Next field (split)",
        "  Enter        Accept / newline (paste)",
        "  C-s          Accept pasted text",
        "  y / n        Answer confirmation",
        "  Esc          Cancel",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn custom_help_text(custom: &CustomKeymap) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if let Some(desc) = custom.description.as_ref() {
        lines.push(desc.clone());
        lines.push(String::new());
    }
    lines.push("Bindings:".to_string());
    if custom.bindings.is_empty() {
        lines.push("  (no bindings)".to_string());
    }
    for binding in &custom.bindings {
        let label = action_label(&binding.action);
        lines.push(format!("  {:<12} {}", binding.combo.display(), label));
    }
    lines.push(String::new());
    lines.push("Arrow keys, PageUp/Down, Home/End and ? always work.".to_string());
    lines
}

fn action_label(action: &Action) -> &'static str {
    match action {
        Action::Move(-1, 0) => "Move left",
        Action::Move(1, 0) => "Move right",
        Action::Move(0, -1) => "Move up",
        Action::Move(0, 1) => "Move down",
        Action::Move(_, _) => "Move",
        Action::Page(-1) => "Page up",
        Action::Page(1) => "Page down",
        Action::Page(_) => "Page",
        Action::HomeCol => "First column",
        Action::EndCol => "Last column",
        Action::GotoFirst => "First row",
        Action::GotoLast => "Last row",
        Action::SwapLeft => "Move column left",
        Action::SwapRight => "Move column right",
        Action::ToggleHeader => "Toggle header",
        Action::OpenSplit => "Split column",
        Action::DeleteColumn => "Delete column",
        Action::Write => "Write CSV and exit",
        Action::Quit => "Quit",
        Action::ToggleHelp => "Toggle help",
    }
}
