//! Plain-text import: one row per line, single column.

/// Split text into lines. Accepts `\n`, `\r\n` and lone `\r`. A trailing line
/// ending does not start another line; interior empty lines are kept.
/// A leading byte-order mark is dropped, as the CSV reader does.
pub fn split_lines(content: &str) -> Vec<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_endings() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("10\n20\n30\n"), vec!["10", "20", "30"]);
    }

    #[test]
    fn test_split_lines_keeps_interior_blank() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_no_delimiter_interpretation() {
        assert_eq!(split_lines("a,b,\"c\"\n"), vec!["a,b,\"c\""]);
    }

    #[test]
    fn test_split_lines_strips_bom() {
        assert_eq!(split_lines("\u{feff}10\n20\n"), vec!["10", "20"]);
        assert_eq!(split_lines("\u{feff}"), Vec::<String>::new());
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
    }
}
