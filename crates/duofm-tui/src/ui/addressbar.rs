//! Address bar rendering.
//!
//! Shows the listing's current directory as a single styled line. While the
//! user edits a path the bar switches to the edit style with a cursor mark.

use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use duofm_core::config::theme::{parse_color, Theme};

/// Renders the address bar.
///
/// `editing` carries the path being typed; `None` displays `current_dir`.
pub fn render_addressbar(
    f: &mut Frame,
    area: Rect,
    current_dir: &Path,
    editing: Option<&str>,
    theme: &Theme,
) {
    let bg = parse_color(&theme.addressbar.bg);
    let path_fg = parse_color(&theme.addressbar.path_fg);
    let edit_fg = parse_color(&theme.addressbar.edit_fg);

    let line = match editing {
        Some(value) => Line::from(vec![
            Span::styled(" > ", Style::default().fg(edit_fg).add_modifier(Modifier::BOLD)),
            Span::styled(value.to_owned(), Style::default().fg(edit_fg)),
            Span::styled("_", Style::default().fg(edit_fg).add_modifier(Modifier::SLOW_BLINK)),
        ]),
        None => {
            let display = duofm_core::nfc_string(&current_dir.to_string_lossy());
            Line::from(Span::styled(
                format!(" {display}"),
                Style::default().fg(path_fg),
            ))
        }
    };

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}
