//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the cursor position, selected-entry info, hidden-file indicator,
//! clipboard state, and an optional transient message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use duofm_core::config::theme::{parse_color, Theme};
use duofm_core::fs::entry::FileEntry;

use crate::ui::listing::format_size;

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub entry_count: usize,
    pub selected_index: usize,
    pub selected_entry: Option<&'a FileEntry>,
    pub show_hidden: bool,
    pub clipboard: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let position_fg = parse_color(&theme.statusbar.position_fg);
    let hidden_fg = parse_color(&theme.statusbar.hidden_fg);
    let message_fg = parse_color(&theme.statusbar.message_fg);

    let position = if props.entry_count > 0 {
        format!(" {}/{}", props.selected_index + 1, props.entry_count)
    } else {
        " 0/0".to_owned()
    };

    let file_info = props
        .selected_entry
        .map(|e| {
            if e.is_dir() {
                format!("  [DIR] {}", e.name())
            } else {
                format!("  {} ({})", e.name(), format_size(e.size()))
            }
        })
        .unwrap_or_default();

    let hidden_indicator = if props.show_hidden { " [H]" } else { "" };

    let clipboard_span = props
        .clipboard
        .map(|name| {
            Span::styled(
                format!("  [copied: {name}]"),
                Style::default().fg(position_fg).bg(bg),
            )
        })
        .unwrap_or_default();

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(message_fg)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            position,
            Style::default()
                .fg(position_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(file_info, Style::default().fg(position_fg).bg(bg)),
        Span::styled(
            hidden_indicator.to_owned(),
            Style::default()
                .fg(hidden_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        clipboard_span,
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}
