//! UI rendering

use super::app::{App, Mode, SplitField, TextInput};
use super::help::{get_dialog_help, get_help_text};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

pub(crate) const TITLE: &str = "Stupid Table Utility (STU)";
pub(crate) const TITLE_BAR_HEIGHT: u16 = 1;
pub(crate) const GRID_MIN_HEIGHT: u16 = 5;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const HELP_PANE_WIDTH: u16 = 36;
pub(crate) const ROW_HEADER_WIDTH: u16 = 5;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Split the body into the table and, when shown, the help pane.
pub(crate) fn split_body(area: Rect, show_help: bool) -> (Rect, Option<Rect>) {
    if !show_help || area.width < HELP_PANE_WIDTH * 2 {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(HELP_PANE_WIDTH)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

/// Map a screen position inside `grid_area` to the (col, row) of the data cell
/// drawn there. The header row, borders, row numbers and column spacing are
/// not cells.
pub(crate) fn grid_cell_at(
    app: &App,
    grid_area: Rect,
    mouse_col: u16,
    mouse_row: u16,
) -> Option<(usize, usize)> {
    if grid_area.width < 3 || grid_area.height < 3 {
        return None;
    }

    let inner_x = grid_area.x.saturating_add(1);
    let inner_y = grid_area.y.saturating_add(1);
    let inner_right = inner_x.saturating_add(grid_area.width.saturating_sub(2));
    let inner_bottom = inner_y.saturating_add(grid_area.height.saturating_sub(2));

    if mouse_col < inner_x
        || mouse_col >= inner_right
        || mouse_row < inner_y
        || mouse_row >= inner_bottom
    {
        return None;
    }

    let grid = &app.doc.grid;
    let body_y = if grid.has_header() {
        inner_y.saturating_add(1)
    } else {
        inner_y
    };
    if mouse_row < body_y {
        return None;
    }

    let rel_row = mouse_row.saturating_sub(body_y) as usize;
    if rel_row >= app.visible_rows {
        return None;
    }
    let row = app.viewport_row.max(grid.data_start()).saturating_add(rel_row);
    if row >= grid.row_count() {
        return None;
    }

    let mut x = inner_x
        .saturating_add(ROW_HEADER_WIDTH)
        .saturating_add(GRID_COLUMN_SPACING);
    if mouse_col < x {
        return None;
    }

    let last_col = (app.viewport_col + app.visible_cols).min(grid.col_count());
    for col in app.viewport_col..last_col {
        let cell_end = x.saturating_add(app.column_width(col) as u16);
        if mouse_col < cell_end {
            return (mouse_col >= x).then_some((col, row));
        }
        x = cell_end.saturating_add(GRID_COLUMN_SPACING);
        if x >= inner_right {
            break;
        }
    }

    None
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let [title_area, body_area, status_area] = split_main_chunks(f.area());
    let (grid_area, help_area) = split_body(body_area, app.show_help);

    // Update visible dimensions based on actual size
    let header_rows = if app.doc.grid.has_header() { 1 } else { 0 };
    app.visible_rows = (grid_area.height.saturating_sub(2 + header_rows) as usize).max(1);
    app.visible_cols = fitting_columns(app, grid_area.width);
    app.update_viewport();

    draw_title_bar(f, title_area);
    draw_grid(f, app, grid_area);
    if let Some(area) = help_area {
        draw_help_pane(f, app, area);
    }
    draw_status_bar(f, app, status_area);

    match app.mode {
        Mode::Normal => {}
        Mode::Split(field) => draw_split_dialog(f, app, field),
        Mode::Paste => draw_paste_dialog(f, app),
        Mode::WritePrompt => draw_write_prompt(f, app),
        Mode::Confirm(confirm) => draw_confirm(f, &app.confirm_prompt(confirm)),
    }
}

/// How many columns starting at the viewport fit in `width`.
fn fitting_columns(app: &App, width: u16) -> usize {
    let available = width.saturating_sub(ROW_HEADER_WIDTH + GRID_COLUMN_SPACING + 2) as usize;
    let mut used = 0;
    let mut count = 0;
    for col in app.viewport_col..app.doc.grid.col_count() {
        let w = app.column_width(col) + GRID_COLUMN_SPACING as usize;
        if count > 0 && used + w > available {
            break;
        }
        used += w;
        count += 1;
    }
    count.max(1)
}

/// First line of a cell, marked when more lines follow.
fn cell_display(text: &str) -> String {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or("");
    if lines.next().is_some() {
        format!("{}…", first)
    } else {
        first.to_string()
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(Color::Cyan));
    f.render_widget(title, area);
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = &app.doc.grid;
    let sel = app.doc.selection;
    let last_col = (app.viewport_col + app.visible_cols).min(grid.col_count());
    let cols = app.viewport_col..last_col;

    let header = grid.header_labels().map(|labels| {
        let mut cells = vec![Cell::from(" ")];
        for col in cols.clone() {
            let style = if col == sel.col {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            };
            let label = labels.get(col).map(String::as_str).unwrap_or("");
            cells.push(Cell::from(cell_display(label)).style(style));
        }
        Row::new(cells).height(1)
    });

    let first = app.viewport_row.max(grid.data_start());
    let last = (first + app.visible_rows).min(grid.row_count());
    let mut rows = Vec::new();
    for row in first..last {
        let mut cells = Vec::new();
        let row_style = if row == sel.row {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let number = row - grid.data_start() + 1;
        cells.push(Cell::from(format!("{}", number)).style(row_style));

        for col in cols.clone() {
            let display = cell_display(grid.cell(row, col).unwrap_or(""));
            let style = if row == sel.row && col == sel.col {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            cells.push(Cell::from(display).style(style));
        }
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(ROW_HEADER_WIDTH)];
    for col in cols {
        widths.push(Constraint::Length(app.column_width(col) as u16));
    }

    let title = match &app.doc.file_path {
        Some(path) => format!(" {} ", path.display()),
        None => " (pasted) ".to_string(),
    };
    let mut table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(GRID_COLUMN_SPACING);
    if let Some(header) = header {
        table = table.header(header);
    }

    f.render_widget(table, area);
}

fn draw_help_pane(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let help = get_help_text(&app.keymap)
        .into_iter()
        .chain(std::iter::once(String::new()))
        .chain(get_dialog_help());
    for text in help {
        let style = if text.starts_with("  ") {
            Style::default().fg(Color::White)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Keys [{}] ", app.keymap.name()))
        .border_style(Style::default().fg(Color::Green));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let grid = &app.doc.grid;
    let modified_indicator = if app.doc.modified { " [+]" } else { "" };
    let position = if grid.col_count() == 0 {
        "empty".to_string()
    } else {
        format!(
            "{} row {}/{}{}",
            app.doc.column_label(app.doc.selection.col),
            app.doc.selection.row + 1 - grid.data_start(),
            grid.data_row_count(),
            modified_indicator
        )
    };

    let status = if !app.status_message.is_empty() {
        format!("{}  |  {}", position, app.status_message)
    } else {
        format!("{}  |  {}", position, app.keymap.status_hint())
    };

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else if !app.status_message.is_empty() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(vec![Span::styled(status, style)]));
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A rect of fixed height, centered vertically, `percent_x` wide.
fn centered_lines(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    let row = Rect::new(area.x, y, area.width, height);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(row)[1]
}

fn modal_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Black)
}

/// Render a single-line input with a cursor marker.
fn input_line<'a>(label: &'a str, input: &TextInput, focused: bool) -> Line<'a> {
    let (before, after) = input.text.split_at(input.cursor.min(input.text.len()));
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value = if focused {
        format!("{}│{}", before, after)
    } else {
        input.text.clone()
    };
    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(value),
    ])
}

fn draw_split_dialog(f: &mut Frame, app: &App, field: SplitField) {
    let area = centered_lines(60, 6, f.area());
    let title = format!(
        " Split column {} ",
        app.doc.column_label(app.doc.selection.col)
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
        .style(modal_style());
    let lines = vec![
        input_line(
            "Split on string: ",
            &app.split_delimiter,
            field == SplitField::Delimiter,
        ),
        input_line(
            "Maximum fields (0 to disable): ",
            &app.split_max,
            field == SplitField::MaxFields,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Tab: switch field  Enter: split  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).style(modal_style()), area);
}

fn draw_paste_dialog(f: &mut Frame, app: &App) {
    let area = centered_rect(80, 80, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Paste data (one row per line) ")
        .title_bottom(" C-s: accept  Esc: quit ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(modal_style());

    let cursor = app.paste.cursor.min(app.paste.text.len());
    let (before, after) = app.paste.text.split_at(cursor);
    let content = format!("{}│{}", before, after);
    let cursor_line = before.matches('\n').count();
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(inner_height.saturating_sub(1));
    let scroll_y = u16::try_from(scroll).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(modal_style())
        .scroll((scroll_y, 0));
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn draw_write_prompt(f: &mut Frame, app: &App) {
    let area = centered_lines(60, 4, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Write CSV to ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(modal_style());
    let lines = vec![
        input_line("File: ", &app.write_path, true),
        Line::from(Span::styled(
            "Enter: write and exit  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).style(modal_style()), area);
}

fn draw_confirm(f: &mut Frame, prompt: &str) {
    let area = centered_lines(50, 3, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .border_style(Style::default().fg(Color::Red))
        .style(modal_style());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(prompt.to_string())
            .block(block)
            .style(modal_style()),
        area,
    );
}
