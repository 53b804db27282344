//! Frame composition — lays out the panes and overlays the modal popups.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use duofm_core::matching_indices;
use duofm_core::Action;

use crate::app::{App, AppMode, ConfirmAction, PaneFocus, MENU_ACTIONS};
use crate::ui::addressbar::render_addressbar;
use crate::ui::listing::render_listing;
use crate::ui::popup::{render_error_popup, render_input_popup, render_list_popup, render_popup};
use crate::ui::statusbar::{render_statusbar, StatusBarProps};
use crate::ui::tree::render_tree;

/// Main render function — composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let addressbar_area = main_chunks[0];
    let content_area = main_chunks[1];
    let statusbar_area = main_chunks[2];

    let editing = match app.mode() {
        AppMode::AddressBar(value) => Some(value.as_str()),
        _ => None,
    };
    render_addressbar(
        f,
        addressbar_area,
        app.listing().current_dir(),
        editing,
        theme,
    );

    // Horizontal split: folder tree | file table
    let tree_percent = (app.config().ui.tree_ratio.clamp(0.1, 0.9) * 100.0) as u16;
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(tree_percent),
            Constraint::Percentage(100 - tree_percent),
        ])
        .split(content_area);

    render_tree(
        f,
        horizontal[0],
        app.tree().rows(),
        app.tree().selected_index(),
        app.focus() == PaneFocus::Tree,
        theme,
    );

    render_listing(
        f,
        horizontal[1],
        app.listing().entries(),
        app.listing().selected_index(),
        app.focus() == PaneFocus::Files,
        &app.config().ui.date_format,
        theme,
    );

    let clipboard_name = app
        .clipboard()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned());
    let status_props = StatusBarProps {
        entry_count: app.listing().entries().len(),
        selected_index: app.listing().selected_index(),
        selected_entry: app.listing().selected_entry(),
        show_hidden: app.listing().show_hidden(),
        clipboard: clipboard_name.as_deref(),
        status_message: app.status_message(),
    };
    render_statusbar(f, statusbar_area, &status_props, theme);

    // Modal overlays
    match app.mode() {
        AppMode::Normal | AppMode::AddressBar(_) => {}
        AppMode::Search(query) => {
            let count = matching_indices(app.listing().entries(), query).len();
            let title = if query.is_empty() {
                "Search".to_string()
            } else {
                format!("Search ({count} match{})", if count == 1 { "" } else { "es" })
            };
            render_input_popup(f, &title, query, theme);
        }
        AppMode::CreateFolder(name) => render_input_popup(f, "New Folder", name, theme),
        AppMode::Rename(name) => render_input_popup(f, "Rename", name, theme),
        AppMode::ZipDest(dest) => render_input_popup(f, "Zip to", dest, theme),
        AppMode::ExtractDest(dest) => render_input_popup(f, "Extract to", dest, theme),
        AppMode::Confirm(ConfirmAction::Delete(path)) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let lines = vec![
                format!("Delete {name}?"),
                "Directories are removed recursively.".to_string(),
                String::new(),
                "y: delete    n: cancel".to_string(),
            ];
            render_popup(f, "Confirm Delete", &lines, theme);
        }
        AppMode::Menu { selected } => {
            let labels: Vec<String> = MENU_ACTIONS
                .iter()
                .map(|a| menu_label(app, *a))
                .collect();
            render_list_popup(f, "Operations", &labels, *selected, theme);
        }
        AppMode::SortSelect { selected } => {
            let labels: Vec<String> = ["Name", "Size", "Created", "Modified"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            render_list_popup(f, "Sort by (a/d: direction)", &labels, *selected, theme);
        }
        AppMode::Error(message) => render_error_popup(f, message, theme),
        AppMode::Help => render_help_popup(f, app),
    }
}

fn menu_label(app: &App, action: Action) -> String {
    let name = app
        .registry()
        .find(action)
        .map(|d| d.name)
        .unwrap_or("?");
    match app.keymap().keys_for_action(action) {
        Some(keys) if !keys.is_empty() => format!("{name}  ({})", keys.join(", ")),
        _ => name.to_string(),
    }
}

fn render_help_popup(f: &mut Frame, app: &App) {
    let mut lines = Vec::new();
    let mut last_category = None;

    for descriptor in app.registry().all() {
        if last_category != Some(descriptor.category) {
            if last_category.is_some() {
                lines.push(String::new());
            }
            lines.push(format!("── {} ──", descriptor.category.label()));
            last_category = Some(descriptor.category);
        }
        let keys = app
            .keymap()
            .keys_for_action(descriptor.action)
            .map(|k| k.join(", "))
            .unwrap_or_default();
        lines.push(format!("  {:<12} {}", keys, descriptor.description));
    }
    lines.push(String::new());
    lines.push("Esc / q: close".to_string());

    render_popup(f, "Help", &lines, app.theme());
}
