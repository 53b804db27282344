//! Centered modal popups: message boxes, text prompts, and list menus.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use duofm_core::config::theme::{parse_color, Theme};

/// Renders a centered popup dialog with the given title and message lines.
pub fn render_popup(f: &mut Frame, title: &str, lines: &[String], theme: &Theme) {
    render_popup_with_border(f, title, lines, parse_color(&theme.popup.border_fg));
}

/// Renders a centered error dialog (red border).
pub fn render_error_popup(f: &mut Frame, message: &str, theme: &Theme) {
    let mut lines: Vec<String> = message.lines().map(|l| l.to_string()).collect();
    lines.push(String::new());
    lines.push("Press Enter to dismiss".to_string());
    render_popup_with_border(f, "Error", &lines, parse_color(&theme.popup.error_fg));
}

fn render_popup_with_border(
    f: &mut Frame,
    title: &str,
    lines: &[String],
    border_fg: ratatui::style::Color,
) {
    let area = centered_rect(50, 40, f.area());

    f.render_widget(Clear, area);

    let content: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();

    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
}

/// Renders a one-line text prompt with the value being edited.
pub fn render_input_popup(f: &mut Frame, title: &str, value: &str, theme: &Theme) {
    let border_fg = parse_color(&theme.popup.border_fg);
    let area = centered_rect(50, 20, f.area());

    f.render_widget(Clear, area);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(value.to_owned(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);

    let popup = Paragraph::new(vec![Line::raw(""), line]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
}

/// Renders a selectable list popup (context menu, sort chooser).
pub fn render_list_popup(
    f: &mut Frame,
    title: &str,
    items: &[String],
    selected: usize,
    theme: &Theme,
) {
    let border_fg = parse_color(&theme.popup.border_fg);
    let selected_fg = parse_color(&theme.popup.selected_fg);
    let area = centered_rect(40, 40, f.area());

    f.render_widget(Clear, area);

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|label| ListItem::new(Line::from(format!(" {label}"))))
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_owned())
                .border_style(Style::default().fg(border_fg)),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(selected_fg),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected.min(items.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut state);
}

/// Calculates a centered rectangle of the given percentage size within the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
