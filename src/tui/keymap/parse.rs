use super::{Action, Binding, CustomKeymap, KeyCombo, Keymap};
use crossterm::event::{KeyCode, KeyModifiers};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

const MAX_KEYMAP_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const MAX_BINDINGS: usize = 512;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeymapsFile {
    meta: Option<KeymapsMeta>,
    keymaps: Option<HashMap<String, KeymapFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeymapsMeta {
    default: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeymapFile {
    description: Option<String>,
    normal: Option<HashMap<String, String>>,
}

/// Resolve the keymap to use.
///
/// Looks in `keymap_file` or the user's `keymaps.toml`. A name on the command
/// line beats `[meta] default`. Anything that goes wrong becomes a warning and
/// the built-in `default` keymap is used instead.
pub fn load_keymap(
    requested: Option<&str>,
    keymap_file: Option<&PathBuf>,
) -> (Keymap, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = keymap_file.cloned().or_else(user_keymaps_path);
    let mut file: Option<KeymapsFile> = None;

    if let Some(path) = config_path.as_ref() {
        if path.exists() {
            match std::fs::metadata(path) {
                Ok(meta) if meta.len() > MAX_KEYMAP_FILE_BYTES => {
                    warnings.push(format!(
                        "Refusing to read {}: file too large ({} bytes, max {})",
                        path.display(),
                        meta.len(),
                        MAX_KEYMAP_FILE_BYTES
                    ));
                }
                Ok(_) => match std::fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<KeymapsFile>(&content) {
                        Ok(parsed) => file = Some(parsed),
                        Err(err) => {
                            warnings.push(format!("Failed to parse {}: {}", path.display(), err))
                        }
                    },
                    Err(err) => {
                        warnings.push(format!("Failed to read {}: {}", path.display(), err))
                    }
                },
                Err(err) => warnings.push(format!(
                    "Failed to read metadata for {}: {}",
                    path.display(),
                    err
                )),
            }
        } else if keymap_file.is_some() {
            warnings.push(format!("Keymap file not found: {}", path.display()));
        }
    }

    let requested_name = requested.map(|name| name.trim()).filter(|s| !s.is_empty());
    let default_name = file
        .as_ref()
        .and_then(|f| f.meta.as_ref())
        .and_then(|m| m.default.as_ref())
        .map(|s| s.as_str());
    let target = requested_name.or(default_name).unwrap_or("default");
    let location = || {
        config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "keymaps.toml".to_string())
    };

    if let Some(file) = file.as_ref()
        && let Some(keymaps) = file.keymaps.as_ref()
    {
        if let Some(entry) = keymaps.get(target) {
            match build_custom_keymap(target, entry) {
                Ok(custom) => return (Keymap::Custom(custom), warnings),
                Err(errs) => {
                    warnings.extend(errs);
                }
            }
        } else if requested_name.is_some() && !is_builtin_keymap(target) {
            warnings.push(format!("Keymap '{}' not found in {}", target, location()));
        }
    }

    if requested_name.is_none() && default_name.is_some() && !is_builtin_keymap(target) {
        let default_exists = file
            .as_ref()
            .and_then(|f| f.keymaps.as_ref())
            .is_some_and(|keymaps| keymaps.contains_key(target));
        if !default_exists {
            warnings.push(format!(
                "Default keymap '{}' not found in {}; falling back to built-in 'default'",
                target,
                location()
            ));
        }
    }

    if target.eq_ignore_ascii_case("vim") {
        (Keymap::Vim, warnings)
    } else {
        if requested_name.is_some() && !target.eq_ignore_ascii_case("default") {
            warnings.push(format!(
                "Falling back to built-in 'default' keymap for '{}'",
                target
            ));
        }
        (Keymap::Default, warnings)
    }
}

fn user_keymaps_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "stu")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("keymaps.toml");
    Some(path)
}

fn is_builtin_keymap(name: &str) -> bool {
    name.eq_ignore_ascii_case("default") || name.eq_ignore_ascii_case("vim")
}

fn build_custom_keymap(name: &str, entry: &KeymapFile) -> Result<CustomKeymap, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();
    let bindings = parse_bindings(entry.normal.as_ref(), &mut errors);

    if errors.is_empty() {
        Ok(CustomKeymap {
            name: name.to_string(),
            description: entry.description.clone(),
            bindings,
        })
    } else {
        Err(errors)
    }
}

fn parse_bindings(raw: Option<&HashMap<String, String>>, errors: &mut Vec<String>) -> Vec<Binding> {
    let mut bindings: Vec<Binding> = Vec::new();
    let Some(raw) = raw else {
        return bindings;
    };
    if raw.len() > MAX_BINDINGS {
        errors.push(format!(
            "Too many normal bindings: {} (max {})",
            raw.len(),
            MAX_BINDINGS
        ));
        return bindings;
    }
    for (combo_str, action_str) in raw {
        match (parse_key_combo(combo_str), action_from_str(action_str)) {
            (Ok(combo), Some(action)) => {
                if bindings.iter().any(|binding| binding.combo == combo) {
                    errors.push(format!(
                        "Duplicate key '{}' in normal bindings",
                        combo.display()
                    ));
                    continue;
                }
                bindings.push(Binding { combo, action });
            }
            (Ok(_), None) => errors.push(format!(
                "Invalid action '{}' in normal bindings",
                action_str
            )),
            (Err(err), _) => errors.push(format!(
                "Invalid key '{}' in normal bindings: {}",
                combo_str, err
            )),
        }
    }
    bindings
}

fn parse_key_combo(input: &str) -> Result<KeyCombo, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("empty key".to_string());
    }
    if let Some(ch) = parse_single_char(trimmed) {
        return Ok(KeyCombo {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::empty(),
        });
    }

    let (mods, key_part) = if !trimmed.contains('-') {
        (KeyModifiers::empty(), trimmed)
    } else if let Some(mod_str) = trimmed.strip_suffix('-') {
        let mod_str = mod_str.trim_end_matches('-');
        if mod_str.is_empty() {
            return Err("missing modifier before '-'".to_string());
        }
        let modifiers = parse_modifiers(mod_str)?;
        (modifiers, "-")
    } else {
        let mut split = trimmed.rsplitn(2, '-');
        let key_part = split.next().ok_or_else(|| "empty key".to_string())?;
        let mod_str = split.next().unwrap_or_default();
        let modifiers = parse_modifiers(mod_str)?;
        (modifiers, key_part)
    };

    let key = parse_key_code(key_part)?;
    Ok(KeyCombo {
        code: key,
        modifiers: mods,
    })
}

fn parse_modifiers(input: &str) -> Result<KeyModifiers, String> {
    let mut modifiers = KeyModifiers::empty();
    let mut seen_any = false;
    for part in input.split('-') {
        let raw = part.trim();
        if raw.is_empty() {
            return Err("empty modifier segment".to_string());
        }
        seen_any = true;
        let norm = raw.to_ascii_lowercase();
        let flag = match norm.as_str() {
            "c" | "ctrl" | "control" => KeyModifiers::CONTROL,
            "m" | "alt" | "meta" => KeyModifiers::ALT,
            "s" | "shift" => KeyModifiers::SHIFT,
            _ => {
                return Err(format!("unknown modifier '{}'", part));
            }
        };
        if modifiers.contains(flag) {
            return Err(format!("duplicate modifier '{}'", raw));
        }
        modifiers.insert(flag);
    }
    if !seen_any {
        return Err("empty modifier".to_string());
    }
    Ok(modifiers)
}

fn parse_key_code(input: &str) -> Result<KeyCode, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("empty key".to_string());
    }
    if let Some(ch) = parse_single_char(trimmed) {
        return Ok(KeyCode::Char(ch));
    }
    let norm = trimmed.to_ascii_lowercase();
    match norm.as_str() {
        "enter" => Ok(KeyCode::Enter),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "backspace" => Ok(KeyCode::Backspace),
        "delete" => Ok(KeyCode::Delete),
        "tab" => Ok(KeyCode::Tab),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" => Ok(KeyCode::PageUp),
        "pagedown" => Ok(KeyCode::PageDown),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "space" | "spc" => Ok(KeyCode::Char(' ')),
        "dash" | "minus" => Ok(KeyCode::Char('-')),
        "plus" => Ok(KeyCode::Char('+')),
        "greater" => Ok(KeyCode::Char('>')),
        "less" => Ok(KeyCode::Char('<')),
        "comma" => Ok(KeyCode::Char(',')),
        "period" | "dot" => Ok(KeyCode::Char('.')),
        "slash" => Ok(KeyCode::Char('/')),
        "backslash" => Ok(KeyCode::Char('\\')),
        "semicolon" => Ok(KeyCode::Char(';')),
        "quote" | "apostrophe" => Ok(KeyCode::Char('\'')),
        "doublequote" => Ok(KeyCode::Char('"')),
        "backtick" | "grave" => Ok(KeyCode::Char('`')),
        "lbracket" | "leftbracket" => Ok(KeyCode::Char('[')),
        "rbracket" | "rightbracket" => Ok(KeyCode::Char(']')),
        "equal" => Ok(KeyCode::Char('=')),
        _ => Err(format!("unknown key '{}'", input)),
    }
}

fn parse_single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    let ch = chars.next()?;
    if chars.next().is_none() {
        Some(ch)
    } else {
        None
    }
}

fn action_from_str(input: &str) -> Option<Action> {
    match input.trim().to_ascii_lowercase().as_str() {
        "move_left" => Some(Action::Move(-1, 0)),
        "move_right" => Some(Action::Move(1, 0)),
        "move_up" => Some(Action::Move(0, -1)),
        "move_down" => Some(Action::Move(0, 1)),
        "page_up" => Some(Action::Page(-1)),
        "page_down" => Some(Action::Page(1)),
        "home_col" => Some(Action::HomeCol),
        "end_col" => Some(Action::EndCol),
        "goto_first" => Some(Action::GotoFirst),
        "goto_last" => Some(Action::GotoLast),
        "swap_left" => Some(Action::SwapLeft),
        "swap_right" => Some(Action::SwapRight),
        "toggle_header" => Some(Action::ToggleHeader),
        "split" => Some(Action::OpenSplit),
        "delete_column" => Some(Action::DeleteColumn),
        "write" => Some(Action::Write),
        "quit" => Some(Action::Quit),
        "help" => Some(Action::ToggleHelp),
        _ => None,
    }
}
