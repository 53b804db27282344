//! File listing table rendering.
//!
//! The right pane is a `Table` with Name / Size / Created / Modified
//! columns. Sizes are shown in human-readable units, timestamps in the
//! user-configured `date_format`.

use std::time::SystemTime;

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};
use duofm_core::config::theme::{parse_color, Theme};
use duofm_core::fs::archive::is_archive;
use duofm_core::fs::entry::FileEntry;

/// Renders the file listing table with the entry at `selected` highlighted.
#[allow(clippy::too_many_arguments)]
pub fn render_listing(
    f: &mut Frame,
    area: Rect,
    entries: &[FileEntry],
    selected: usize,
    is_active: bool,
    date_format: &str,
    theme: &Theme,
) {
    let selected_fg = parse_color(&theme.listing.selected_fg);
    let header_fg = parse_color(&theme.listing.header_fg);

    let header = Row::new(vec!["Name", "Size", "Created", "Modified"]).style(
        Style::default()
            .fg(header_fg)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            let name = if entry.is_dir() {
                format!("{}/", entry.name())
            } else {
                entry.name().to_string()
            };
            let size = if entry.is_dir() {
                String::new()
            } else {
                format_size(entry.size())
            };
            Row::new(vec![
                name,
                size,
                format_time(entry.created(), date_format),
                format_time(entry.modified(), date_format),
            ])
            .style(entry_style(entry, theme))
        })
        .collect();

    let border_color = if is_active {
        selected_fg
    } else {
        Color::DarkGray
    };

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(17),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Files")
            .border_style(Style::default().fg(border_color)),
    )
    .row_highlight_style(
        Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(selected_fg),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !entries.is_empty() {
        state.select(Some(selected.min(entries.len() - 1)));
    }

    f.render_stateful_widget(table, area, &mut state);
}

fn entry_style(entry: &FileEntry, theme: &Theme) -> Style {
    if entry.is_dir() {
        Style::default()
            .fg(parse_color(&theme.listing.dir_fg))
            .add_modifier(Modifier::BOLD)
    } else if entry.is_symlink() {
        Style::default().fg(parse_color(&theme.listing.symlink_fg))
    } else if is_archive(entry.path()) {
        Style::default().fg(parse_color(&theme.listing.archive_fg))
    } else if entry.is_hidden() {
        Style::default().fg(parse_color(&theme.listing.hidden_fg))
    } else {
        Style::default()
    }
}

/// Formats a byte count using binary units, one decimal above bytes.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Formats an optional timestamp with the configured strftime pattern.
pub fn format_time(time: Option<SystemTime>, date_format: &str) -> String {
    match time {
        Some(t) => {
            let local: DateTime<Local> = t.into();
            local.format(date_format).to_string()
        }
        None => "-".to_string(),
    }
}
