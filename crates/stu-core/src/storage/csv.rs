//! CSV import/export functionality

use crate::error::{Result, StuError};
use std::io::Write;
use stu_engine::Grid;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// Saw a `"` while quoted: either an escaped quote or the closing one.
    QuoteInQuoted,
}

/// Parse CSV text into records.
///
/// Quoted fields may span lines and use `""` for a literal quote. Blank lines
/// between records are skipped. Records are returned as-is; callers pad them
/// to a common width.
pub fn parse_csv(content: &str) -> Result<Vec<Vec<String>>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;
    let mut line = 1usize;
    let mut quote_line = 1usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::FieldStart | State::Unquoted | State::QuoteInQuoted
                if c == '\r' || c == '\n' =>
            {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if !(state == State::FieldStart && record.is_empty()) {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                state = State::FieldStart;
                line += 1;
            }
            State::FieldStart => match c {
                '"' => {
                    state = State::Quoted;
                    quote_line = line;
                }
                ',' => record.push(std::mem::take(&mut field)),
                _ => {
                    field.push(c);
                    state = State::Unquoted;
                }
            },
            State::Unquoted => match c {
                ',' => {
                    record.push(std::mem::take(&mut field));
                    state = State::FieldStart;
                }
                '"' => {
                    return Err(StuError::MalformedInput {
                        line,
                        message: "bare \" in non-quoted field".to_string(),
                    });
                }
                _ => field.push(c),
            },
            State::Quoted => {
                if c == '"' {
                    state = State::QuoteInQuoted;
                } else {
                    if c == '\n' || (c == '\r' && chars.peek() != Some(&'\n')) {
                        line += 1;
                    }
                    field.push(c);
                }
            }
            State::QuoteInQuoted => match c {
                '"' => {
                    field.push('"');
                    state = State::Quoted;
                }
                ',' => {
                    record.push(std::mem::take(&mut field));
                    state = State::FieldStart;
                }
                _ => {
                    return Err(StuError::MalformedInput {
                        line,
                        message: format!("unexpected {:?} after closing quote", c),
                    });
                }
            },
        }
    }

    match state {
        State::Quoted => {
            return Err(StuError::MalformedInput {
                line: quote_line,
                message: "unterminated quoted field".to_string(),
            });
        }
        State::FieldStart if record.is_empty() => {}
        _ => {
            record.push(field);
            records.push(record);
        }
    }

    Ok(records)
}

/// Write every data row of the grid as CSV. The header row is never written.
pub fn write_csv<W: Write>(grid: &Grid, out: W) -> Result<()> {
    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(out);
    for row in grid.data_rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize the grid's data rows to CSV bytes.
pub fn to_csv_bytes(grid: &Grid) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(grid, &mut buf)?;
    Ok(buf)
}
