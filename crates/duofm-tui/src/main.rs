//! DuoFM — a two-pane file browser for the terminal, built with ratatui.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic.

mod app;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use duofm_core::config::keymap::Keymap;
use duofm_core::config::settings::Config;
use duofm_core::config::theme::Theme;
use duofm_core::nav::search::SortDirection;

use crate::app::{App, AppMode, MENU_ACTIONS};
use crate::input::{handle_key, InputAction, InputState};
use crate::render::render;

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Returns the user configuration directory (~/.config/duofm).
fn config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("duofm")
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (logs to file to avoid terminal interference)
    tracing_subscriber::fmt()
        .with_writer(|| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("/tmp/duofm.log")
                .expect("failed to open log file")
        })
        .with_max_level(tracing::Level::DEBUG)
        .init();

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let start_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().expect("failed to get current directory"));

    let result = run_app(&mut terminal, &start_dir);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    start_dir: &Path,
) -> anyhow::Result<()> {
    let cfg_dir = config_dir();
    let config = Config::load(&cfg_dir.join("config.toml")).unwrap_or_else(|e| {
        tracing::debug!("using default config: {e}");
        Config::default()
    });
    let keymap = Keymap::load(&cfg_dir.join("keymap.toml")).unwrap_or_default();
    let theme = Theme::load(&cfg_dir.join("theme.toml")).unwrap_or_default();

    let mut app = App::new(start_dir, config, keymap, theme)?;
    let mut input_state = InputState::new();

    loop {
        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            break;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let (action, new_input_state) = handle_key(key, app.mode(), &input_state, app.keymap());
        input_state = new_input_state;

        app = dispatch(app, action);
    }

    Ok(())
}

/// Applies one input action to the application state.
fn dispatch(app: App, action: InputAction) -> App {
    match action {
        InputAction::Command(cmd) => app.with_clear_status().handle_command(cmd),
        InputAction::EnterMode(mode) => app.with_mode(mode),
        InputAction::Quit => app.with_quit(),
        InputAction::CursorTop => app.with_cursor_top(),
        InputAction::CursorBottom => app.with_cursor_bottom(),
        InputAction::SwitchPane => app.with_switched_focus(),
        InputAction::GoHome => match std::env::var("HOME") {
            Ok(home) => app.with_clear_status().opened(Path::new(&home)),
            Err(_) => app.with_status("Could not determine home directory".to_string()),
        },
        InputAction::OpenAddressBar => app.address_bar_opened(),
        InputAction::RequestDelete => app.delete_requested(),
        InputAction::RequestRename => app.rename_opened(),
        InputAction::RequestZip => app.zip_requested(),
        InputAction::RequestExtract => app.extract_requested(),
        InputAction::CopySelected => app.copy_selected(),
        InputAction::Paste => app.paste_clipboard(),
        InputAction::ConfirmApproved => app.confirm_approved(),
        InputAction::TextChar(c) => match app.mode().clone() {
            AppMode::Search(_) => app.search_push_char(c),
            AppMode::AddressBar(value) => app.with_mode(AppMode::AddressBar(pushed(value, c))),
            AppMode::CreateFolder(value) => app.with_mode(AppMode::CreateFolder(pushed(value, c))),
            AppMode::Rename(value) => app.with_mode(AppMode::Rename(pushed(value, c))),
            AppMode::ZipDest(value) => app.with_mode(AppMode::ZipDest(pushed(value, c))),
            AppMode::ExtractDest(value) => app.with_mode(AppMode::ExtractDest(pushed(value, c))),
            _ => app,
        },
        InputAction::TextBackspace => match app.mode().clone() {
            AppMode::Search(_) => app.search_pop_char(),
            AppMode::AddressBar(value) => app.with_mode(AppMode::AddressBar(popped(value))),
            AppMode::CreateFolder(value) => app.with_mode(AppMode::CreateFolder(popped(value))),
            AppMode::Rename(value) => app.with_mode(AppMode::Rename(popped(value))),
            AppMode::ZipDest(value) => app.with_mode(AppMode::ZipDest(popped(value))),
            AppMode::ExtractDest(value) => app.with_mode(AppMode::ExtractDest(popped(value))),
            _ => app,
        },
        InputAction::TextConfirm => match app.mode().clone() {
            AppMode::Search(_) => app.search_confirm(),
            AppMode::AddressBar(value) => app.address_confirm(&value),
            AppMode::CreateFolder(value) => app.create_folder_confirm(&value),
            AppMode::Rename(value) => app.rename_confirm(&value),
            AppMode::ZipDest(value) => app.zip_confirm(&value),
            AppMode::ExtractDest(value) => app.extract_confirm(&value),
            _ => app,
        },
        InputAction::MenuDown => match app.mode() {
            AppMode::Menu { selected } => {
                let max = MENU_ACTIONS.len() - 1;
                let next = (*selected + 1).min(max);
                app.with_mode(AppMode::Menu { selected: next })
            }
            _ => app,
        },
        InputAction::MenuUp => match app.mode() {
            AppMode::Menu { selected } => {
                let next = selected.saturating_sub(1);
                app.with_mode(AppMode::Menu { selected: next })
            }
            _ => app,
        },
        InputAction::MenuConfirm => match app.mode() {
            AppMode::Menu { selected } => {
                let selected = *selected;
                app.menu_confirm(selected)
            }
            _ => app,
        },
        InputAction::SortDown => match app.mode() {
            AppMode::SortSelect { selected } => {
                let next = (*selected + 1).min(3);
                app.with_mode(AppMode::SortSelect { selected: next })
            }
            _ => app,
        },
        InputAction::SortUp => match app.mode() {
            AppMode::SortSelect { selected } => {
                let next = selected.saturating_sub(1);
                app.with_mode(AppMode::SortSelect { selected: next })
            }
            _ => app,
        },
        InputAction::SortConfirm => match app.mode() {
            AppMode::SortSelect { selected } => {
                let selected = *selected;
                app.sort_confirm(selected, None)
            }
            _ => app,
        },
        InputAction::SortAscending => match app.mode() {
            AppMode::SortSelect { selected } => {
                let selected = *selected;
                app.sort_confirm(selected, Some(SortDirection::Ascending))
            }
            _ => app,
        },
        InputAction::SortDescending => match app.mode() {
            AppMode::SortSelect { selected } => {
                let selected = *selected;
                app.sort_confirm(selected, Some(SortDirection::Descending))
            }
            _ => app,
        },
        InputAction::None => app,
    }
}

fn pushed(mut value: String, c: char) -> String {
    value.push(c);
    value
}

fn popped(mut value: String) -> String {
    value.pop();
    value
}
