//! Folder tree pane rendering.
//!
//! Renders the flattened [`TreeRow`]s as a scrollable `List`, indenting by
//! depth and marking expandable rows with `▸`/`▾`.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use duofm_core::config::theme::{parse_color, Theme};
use duofm_core::nav::tree::TreeRow;

/// Renders the folder tree with the row at `selected` highlighted.
pub fn render_tree(
    f: &mut Frame,
    area: Rect,
    rows: &[TreeRow],
    selected: usize,
    is_active: bool,
    theme: &Theme,
) {
    let dir_fg = parse_color(&theme.tree.dir_fg);
    let selected_fg = parse_color(&theme.tree.selected_fg);
    let marker_fg = parse_color(&theme.tree.marker_fg);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let marker = if row.expanded { "▾ " } else { "▸ " };
            let style = if row.depth == 0 {
                Style::default().fg(dir_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(dir_fg)
            };
            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(marker, Style::default().fg(marker_fg)),
                Span::styled(row.name.clone(), style),
            ]))
        })
        .collect();

    let border_color = if is_active {
        selected_fg
    } else {
        Color::DarkGray
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Folders")
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(selected_fg),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(selected.min(rows.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut state);
}
