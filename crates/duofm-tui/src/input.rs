//! Keyboard input routing.
//!
//! Each [`AppMode`] gets its own handler. Normal mode resolves character
//! keys through the user [`Keymap`]; arrow keys, Enter, and Ctrl+C stay
//! hardcoded. Text-entry modes (address bar, search, prompts) share one
//! editing vocabulary: [`InputAction::TextChar`], `TextBackspace`, and
//! `TextConfirm`, interpreted against the active mode by the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duofm_core::action::Action;
use duofm_core::command::Command;
use duofm_core::config::keymap::Keymap;

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Enter a new AppMode.
    EnterMode(AppMode),
    /// Quit the application.
    Quit,
    /// Jump cursor to top (gg).
    CursorTop,
    /// Jump cursor to bottom (G).
    CursorBottom,
    /// Navigate to the home directory (~).
    GoHome,
    /// Move focus between the tree and the listing.
    SwitchPane,
    /// Open the address bar prefilled with the current directory.
    OpenAddressBar,
    /// Request deletion of the selected entry.
    RequestDelete,
    /// Open the rename prompt for the selected entry.
    RequestRename,
    /// Open the zip destination prompt for the selected folder.
    RequestZip,
    /// Open the extraction prompt for the selected archive.
    RequestExtract,
    /// Remember the selected entry for pasting.
    CopySelected,
    /// Copy the remembered entry into the current directory.
    Paste,
    /// User confirmed the pending destructive action.
    ConfirmApproved,
    /// Append a character to the active text input.
    TextChar(char),
    /// Remove the last character from the active text input.
    TextBackspace,
    /// Confirm the active text input.
    TextConfirm,
    /// Move selection down in the menu popup.
    MenuDown,
    /// Move selection up in the menu popup.
    MenuUp,
    /// Confirm the selected menu entry.
    MenuConfirm,
    /// Move selection down in the sort popup.
    SortDown,
    /// Move selection up in the sort popup.
    SortUp,
    /// Apply the selected sort field, keeping the current direction.
    SortConfirm,
    /// Apply the selected sort field, ascending.
    SortAscending,
    /// Apply the selected sort field, descending.
    SortDescending,
    /// No action for this key.
    None,
}

/// Tracks state for multi-key sequences like "gg".
#[derive(Debug, Default)]
pub struct InputState {
    pending_g: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self { pending_g: false }
    }
}

/// Maps a key event to an InputAction based on the current mode.
/// Returns the action and a new InputState (immutable pattern).
pub fn handle_key(
    key: KeyEvent,
    mode: &AppMode,
    state: &InputState,
    keymap: &Keymap,
) -> (InputAction, InputState) {
    match mode {
        AppMode::Normal => handle_normal_key(key, state, keymap),
        AppMode::AddressBar(_)
        | AppMode::Search(_)
        | AppMode::CreateFolder(_)
        | AppMode::Rename(_)
        | AppMode::ZipDest(_)
        | AppMode::ExtractDest(_) => handle_text_key(key),
        AppMode::Confirm(_) => handle_confirm_key(key),
        AppMode::Menu { .. } => handle_menu_key(key),
        AppMode::SortSelect { .. } => handle_sort_key(key),
        AppMode::Error(_) => handle_error_key(key),
        AppMode::Help => handle_help_key(key),
    }
}

/// Converts an [`Action`] to the corresponding [`InputAction`].
pub fn action_to_input_action(action: Action) -> InputAction {
    match action {
        Action::CursorDown => InputAction::Command(Command::CursorDown),
        Action::CursorUp => InputAction::Command(Command::CursorUp),
        Action::CursorTop => InputAction::CursorTop,
        Action::CursorBottom => InputAction::CursorBottom,
        Action::EnterDir => InputAction::Command(Command::Enter),
        Action::GoParent => InputAction::Command(Command::GoUp),
        Action::GoHome => InputAction::GoHome,
        Action::GoBack => InputAction::Command(Command::GoBack),
        Action::GoForward => InputAction::Command(Command::GoForward),
        Action::Refresh => InputAction::Command(Command::Refresh),
        Action::SwitchPane => InputAction::SwitchPane,
        Action::AddressBar => InputAction::OpenAddressBar,
        Action::CreateFolder => InputAction::EnterMode(AppMode::CreateFolder(String::new())),
        Action::Delete => InputAction::RequestDelete,
        Action::Rename => InputAction::RequestRename,
        Action::Copy => InputAction::CopySelected,
        Action::Paste => InputAction::Paste,
        Action::Zip => InputAction::RequestZip,
        Action::Extract => InputAction::RequestExtract,
        Action::ToggleHidden => InputAction::Command(Command::ToggleHidden),
        Action::Search => InputAction::EnterMode(AppMode::Search(String::new())),
        Action::SortSelect => InputAction::EnterMode(AppMode::SortSelect { selected: 0 }),
        Action::ContextMenu => InputAction::EnterMode(AppMode::Menu { selected: 0 }),
        Action::Help => InputAction::EnterMode(AppMode::Help),
        Action::Quit => InputAction::Quit,
    }
}

fn handle_normal_key(
    key: KeyEvent,
    state: &InputState,
    keymap: &Keymap,
) -> (InputAction, InputState) {
    // Handle "gg" sequence
    if state.pending_g {
        let new_state = InputState { pending_g: false };
        return match key.code {
            KeyCode::Char('g') => (InputAction::CursorTop, new_state),
            _ => (InputAction::None, new_state),
        };
    }

    let new_state = InputState { pending_g: false };

    // Hardcoded keys: arrows, Enter, Ctrl+C (not remappable)
    let action = match key.code {
        KeyCode::Down => InputAction::Command(Command::CursorDown),
        KeyCode::Up => InputAction::Command(Command::CursorUp),
        KeyCode::Left => InputAction::Command(Command::GoUp),
        KeyCode::Right => InputAction::Command(Command::Enter),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char('g') => {
            return (InputAction::None, InputState { pending_g: true });
        }
        KeyCode::Enter => match keymap.action_for_key("Enter") {
            Some(action) => action_to_input_action(action),
            None => InputAction::Command(Command::Enter),
        },
        KeyCode::Tab => match keymap.action_for_key("Tab") {
            Some(action) => action_to_input_action(action),
            None => InputAction::SwitchPane,
        },
        // Look up character keys in the keymap
        KeyCode::Char(c) => {
            let key_str = c.to_string();
            match keymap.action_for_key(&key_str) {
                Some(action) => action_to_input_action(action),
                None => InputAction::None,
            }
        }
        _ => InputAction::None,
    };

    (action, new_state)
}

fn handle_text_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc => InputAction::EnterMode(AppMode::Normal),
        KeyCode::Enter => InputAction::TextConfirm,
        KeyCode::Backspace => InputAction::TextBackspace,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::EnterMode(AppMode::Normal)
        }
        KeyCode::Char(c) => InputAction::TextChar(c),
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_confirm_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => InputAction::ConfirmApproved,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            InputAction::EnterMode(AppMode::Normal)
        }
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_menu_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => {
            InputAction::EnterMode(AppMode::Normal)
        }
        KeyCode::Char('j') | KeyCode::Down => InputAction::MenuDown,
        KeyCode::Char('k') | KeyCode::Up => InputAction::MenuUp,
        KeyCode::Enter | KeyCode::Char('l') => InputAction::MenuConfirm,
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_sort_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputAction::EnterMode(AppMode::Normal),
        KeyCode::Char('j') | KeyCode::Down => InputAction::SortDown,
        KeyCode::Char('k') | KeyCode::Up => InputAction::SortUp,
        KeyCode::Enter => InputAction::SortConfirm,
        KeyCode::Char('a') => InputAction::SortAscending,
        KeyCode::Char('d') => InputAction::SortDescending,
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_error_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            InputAction::EnterMode(AppMode::Normal)
        }
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_help_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            InputAction::EnterMode(AppMode::Normal)
        }
        _ => InputAction::None,
    };
    (action, new_state)
}
