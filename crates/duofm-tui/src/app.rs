//! Application state and the pane-synchronization logic.
//!
//! [`App`] owns the folder tree (left pane), the file listing (right pane),
//! the input mode, and everything the renderer needs. The invariant the
//! whole application hangs on: the address bar always shows the listing's
//! directory, the tree cursor tracks it, and every filesystem mutation is
//! followed by a refresh of both panes.
//!
//! `App` is immutable in the project-wide style — every transition consumes
//! `self` and returns the next state.

use std::path::{Path, PathBuf};

use duofm_core::command::Command;
use duofm_core::config::keymap::Keymap;
use duofm_core::config::settings::Config;
use duofm_core::config::theme::Theme;
use duofm_core::fs::archive::{extract_archive, is_archive, zip_directory};
use duofm_core::fs::ops::{copy_entry, create_directory, delete_entry, rename_entry};
use duofm_core::fs::volumes::list_roots;
use duofm_core::nav::listing::{Listing, ViewOptions};
use duofm_core::nav::search::{find_first_match, SortDirection, SortField};
use duofm_core::nav::tree::DirTree;
use duofm_core::{Action, ActionRegistry, CoreResult};

/// Which pane receives cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    Tree,
    Files,
}

/// Application mode — determines how input is routed.
#[derive(Debug, Clone)]
pub enum AppMode {
    Normal,
    /// Editing the address bar; the string is the path being typed.
    AddressBar(String),
    /// Typing a name search query.
    Search(String),
    /// Typing a name for a new folder.
    CreateFolder(String),
    /// Typing a new name for the selected entry.
    Rename(String),
    /// Typing the destination path for a zip archive.
    ZipDest(String),
    /// Typing the destination directory for extraction.
    ExtractDest(String),
    /// Waiting for y/n on a destructive action.
    Confirm(ConfirmAction),
    /// The operations menu — `selected` is the cursor index.
    Menu { selected: usize },
    /// Sort field selection popup — `selected` is the cursor index.
    SortSelect { selected: usize },
    /// A modal error dialog.
    Error(String),
    Help,
}

/// What action is pending user confirmation.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    Delete(PathBuf),
}

/// Operations offered by the context menu, in display order.
pub const MENU_ACTIONS: [Action; 7] = [
    Action::CreateFolder,
    Action::Delete,
    Action::Rename,
    Action::Zip,
    Action::Extract,
    Action::Copy,
    Action::Paste,
];

/// Top-level application state.
#[derive(Debug, Clone)]
pub struct App {
    tree: DirTree,
    listing: Listing,
    focus: PaneFocus,
    mode: AppMode,
    clipboard: Option<PathBuf>,
    status_message: Option<String>,
    config: Config,
    keymap: Keymap,
    theme: Theme,
    registry: ActionRegistry,
    should_quit: bool,
}

impl App {
    /// Creates the initial state rooted at `start_dir`.
    ///
    /// The listing opens `start_dir`; the tree expands down to it.
    pub fn new(start_dir: &Path, config: Config, keymap: Keymap, theme: Theme) -> CoreResult<Self> {
        let options = ViewOptions {
            show_hidden: config.general.show_hidden,
            dirs_first: config.general.sort_dir_first,
            sort_field: config.general.default_sort_field(),
            sort_direction: SortDirection::Ascending,
        };
        let listing = Listing::from_dir(start_dir, options)?;
        let tree = DirTree::new(list_roots()).with_selected_path(listing.current_dir());

        Ok(Self {
            tree,
            listing,
            focus: PaneFocus::Files,
            mode: AppMode::Normal,
            clipboard: None,
            status_message: None,
            config,
            keymap,
            theme,
            registry: ActionRegistry::new(),
            should_quit: false,
        })
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn tree(&self) -> &DirTree {
        &self.tree
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn focus(&self) -> PaneFocus {
        self.focus
    }

    pub fn clipboard(&self) -> Option<&Path> {
        self.clipboard.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    pub fn with_mode(self, mode: AppMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_status(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            ..self
        }
    }

    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    /// Surfaces a failure as a modal error dialog.
    pub fn with_error(self, message: String) -> Self {
        tracing::warn!("{message}");
        Self {
            mode: AppMode::Error(message),
            ..self
        }
    }

    pub fn with_switched_focus(self) -> Self {
        let focus = match self.focus {
            PaneFocus::Tree => PaneFocus::Files,
            PaneFocus::Files => PaneFocus::Tree,
        };
        Self { focus, ..self }
    }

    /// Routes a [`Command`] against the focused pane.
    pub fn handle_command(self, cmd: Command) -> Self {
        match cmd {
            Command::Navigate(path) => self.opened(&path),
            Command::GoUp => {
                let result = self.listing.go_up();
                self.synced_from(result)
            }
            Command::GoBack => match self.listing.go_back() {
                Ok(Some(listing)) => self.synced_to(listing),
                Ok(None) => self,
                Err(e) => self.with_error(e.to_string()),
            },
            Command::GoForward => match self.listing.go_forward() {
                Ok(Some(listing)) => self.synced_to(listing),
                Ok(None) => self,
                Err(e) => self.with_error(e.to_string()),
            },
            Command::Refresh => self.refreshed(None),
            Command::ToggleHidden => {
                let result = self.listing.with_toggle_hidden();
                self.replaced_listing(result)
            }
            Command::SetSort(field, direction) => {
                let result = self.listing.with_sort(field, direction);
                self.replaced_listing(result)
            }
            Command::CursorUp => match self.focus {
                PaneFocus::Tree => Self {
                    tree: self.tree.clone().with_cursor_up(),
                    ..self
                },
                PaneFocus::Files => Self {
                    listing: self.listing.clone().with_cursor_up(),
                    ..self
                },
            },
            Command::CursorDown => match self.focus {
                PaneFocus::Tree => Self {
                    tree: self.tree.clone().with_cursor_down(),
                    ..self
                },
                PaneFocus::Files => Self {
                    listing: self.listing.clone().with_cursor_down(),
                    ..self
                },
            },
            Command::Enter => self.activated(),
        }
    }

    /// Jumps both cursors to the top of the focused pane.
    pub fn with_cursor_top(self) -> Self {
        match self.focus {
            PaneFocus::Tree => Self {
                tree: self.tree.clone().with_cursor_top(),
                ..self
            },
            PaneFocus::Files => Self {
                listing: self.listing.clone().with_cursor_top(),
                ..self
            },
        }
    }

    /// Jumps the focused pane's cursor to the bottom.
    pub fn with_cursor_bottom(self) -> Self {
        match self.focus {
            PaneFocus::Tree => Self {
                tree: self.tree.clone().with_cursor_bottom(),
                ..self
            },
            PaneFocus::Files => Self {
                listing: self.listing.clone().with_cursor_bottom(),
                ..self
            },
        }
    }

    /// Activates the current selection.
    ///
    /// In the tree this toggles expansion and loads the directory into the
    /// listing; in the listing it opens the selected directory.
    fn activated(self) -> Self {
        match self.focus {
            PaneFocus::Tree => {
                let Some(path) = self.tree.selected_row().map(|r| r.path.clone()) else {
                    return self;
                };
                let tree = self.tree.clone().with_toggle_expanded();
                let app = Self { tree, ..self };
                match app.listing.navigate_to(&path) {
                    Ok(listing) => Self {
                        listing,
                        ..app
                    },
                    Err(e) => app.with_error(format!("Cannot open {}: {e}", path.display())),
                }
            }
            PaneFocus::Files => {
                let target = match self.listing.selected_entry() {
                    Some(entry) if entry.is_dir() => Some(entry.path().to_path_buf()),
                    _ => None,
                };
                match target {
                    Some(path) => self.opened(&path),
                    None => self,
                }
            }
        }
    }

    /// Opens `path` in the listing and tracks it in the tree.
    pub fn opened(self, path: &Path) -> Self {
        let result = self.listing.navigate_to(path);
        match result {
            Ok(listing) => self.synced_to(listing),
            Err(e) => self.with_error(format!("Cannot open {}: {e}", path.display())),
        }
    }

    fn synced_to(self, listing: Listing) -> Self {
        let tree = self.tree.clone().with_selected_path(listing.current_dir());
        Self {
            tree,
            listing,
            ..self
        }
    }

    fn synced_from(self, result: CoreResult<Listing>) -> Self {
        match result {
            Ok(listing) => self.synced_to(listing),
            Err(e) => self.with_error(e.to_string()),
        }
    }

    fn replaced_listing(self, result: CoreResult<Listing>) -> Self {
        match result {
            Ok(listing) => Self { listing, ..self },
            Err(e) => self.with_error(e.to_string()),
        }
    }

    /// Re-reads both panes, optionally parking the listing cursor on `path`.
    pub fn refreshed(self, cursor_on: Option<PathBuf>) -> Self {
        let listing = match self.listing.refreshed() {
            Ok(l) => l,
            Err(e) => return self.with_error(e.to_string()),
        };
        let listing = match cursor_on {
            Some(path) => listing.with_cursor_on(&path),
            None => listing,
        };
        Self {
            tree: self.tree.clone().refreshed(),
            listing,
            ..self
        }
    }

    // --- Address bar ---

    /// Opens the address bar prefilled with the current directory.
    pub fn address_bar_opened(self) -> Self {
        let current = self.listing.current_dir().to_string_lossy().into_owned();
        self.with_mode(AppMode::AddressBar(current))
    }

    /// Confirms the typed path — navigates or shows an error dialog.
    pub fn address_confirm(self, input: &str) -> Self {
        let expanded = expand_home(input.trim());
        if expanded.as_os_str().is_empty() {
            return self.with_mode(AppMode::Normal);
        }
        let path = match expanded.canonicalize() {
            Ok(p) => p,
            Err(_) => {
                return self.with_error(format!("No such directory: {}", expanded.display()));
            }
        };
        if !path.is_dir() {
            return self.with_error(format!("Not a directory: {}", path.display()));
        }
        self.with_mode(AppMode::Normal).opened(&path)
    }

    // --- Search ---

    /// Appends a character to the search query, tracking the first match.
    pub fn search_push_char(self, c: char) -> Self {
        let query = match &self.mode {
            AppMode::Search(q) => format!("{q}{c}"),
            _ => return self,
        };
        self.searched(query)
    }

    /// Removes the last character from the search query.
    pub fn search_pop_char(self) -> Self {
        let query = match &self.mode {
            AppMode::Search(q) => {
                let mut q = q.clone();
                q.pop();
                q
            }
            _ => return self,
        };
        self.searched(query)
    }

    fn searched(self, query: String) -> Self {
        let listing = match find_first_match(self.listing.entries(), &query) {
            Some(idx) => self.listing.clone().with_cursor_to(idx),
            None => self.listing.clone(),
        };
        Self {
            listing,
            mode: AppMode::Search(query),
            ..self
        }
    }

    /// Confirms the search — selects the first match or reports "not found".
    pub fn search_confirm(self) -> Self {
        let query = match &self.mode {
            AppMode::Search(q) => q.clone(),
            _ => return self,
        };
        match find_first_match(self.listing.entries(), &query) {
            Some(idx) => {
                let listing = self.listing.clone().with_cursor_to(idx);
                Self {
                    listing,
                    mode: AppMode::Normal,
                    ..self
                }
            }
            None => self.with_error(format!("No entry matching \"{query}\"")),
        }
    }

    // --- Create folder ---

    pub fn create_folder_confirm(self, name: &str) -> Self {
        let name = name.trim();
        match create_directory(self.listing.current_dir(), name) {
            Ok(path) => self
                .with_mode(AppMode::Normal)
                .with_status(format!("Created folder {name}"))
                .refreshed(Some(path)),
            Err(e) => self.with_error(format!("Cannot create folder: {e}")),
        }
    }

    // --- Rename ---

    /// Opens the rename prompt prefilled with the selected entry's name.
    pub fn rename_opened(self) -> Self {
        match self.listing.selected_entry() {
            Some(entry) => {
                let name = entry.name().to_string();
                self.with_mode(AppMode::Rename(name))
            }
            None => self.with_status("Nothing selected".to_string()),
        }
    }

    pub fn rename_confirm(self, new_name: &str) -> Self {
        let Some(path) = self.listing.selected_entry().map(|e| e.path().to_path_buf()) else {
            return self.with_mode(AppMode::Normal);
        };
        match rename_entry(&path, new_name.trim()) {
            Ok(new_path) => self
                .with_mode(AppMode::Normal)
                .with_status(format!("Renamed to {}", new_name.trim()))
                .refreshed(Some(new_path)),
            Err(e) => self.with_error(format!("Cannot rename: {e}")),
        }
    }

    // --- Delete ---

    /// Requests deletion of the selected entry, confirming when configured.
    pub fn delete_requested(self) -> Self {
        let Some(path) = self.listing.selected_entry().map(|e| e.path().to_path_buf()) else {
            return self.with_status("Nothing selected".to_string());
        };
        if self.config.general.confirm_delete {
            self.with_mode(AppMode::Confirm(ConfirmAction::Delete(path)))
        } else {
            self.deleted(&path)
        }
    }

    /// Runs the confirmed destructive action.
    pub fn confirm_approved(self) -> Self {
        match self.mode.clone() {
            AppMode::Confirm(ConfirmAction::Delete(path)) => {
                self.with_mode(AppMode::Normal).deleted(&path)
            }
            _ => self,
        }
    }

    fn deleted(self, path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match delete_entry(path) {
            Ok(()) => self
                .with_status(format!("Deleted {name}"))
                .refreshed(None),
            Err(e) => self.with_error(format!("Cannot delete {name}: {e}")),
        }
    }

    // --- Copy / paste ---

    pub fn copy_selected(self) -> Self {
        match self.listing.selected_entry() {
            Some(entry) => {
                let name = entry.name().to_string();
                let path = entry.path().to_path_buf();
                Self {
                    clipboard: Some(path),
                    ..self
                }
                .with_status(format!("Copied {name} — press p to paste"))
            }
            None => self.with_status("Nothing selected".to_string()),
        }
    }

    pub fn paste_clipboard(self) -> Self {
        let Some(src) = self.clipboard.clone() else {
            return self.with_status("Clipboard is empty".to_string());
        };
        let Some(name) = src.file_name().map(|n| n.to_os_string()) else {
            return self.with_status("Clipboard is empty".to_string());
        };
        let dest = self.listing.current_dir().join(&name);
        match copy_entry(&src, &dest) {
            Ok(()) => self
                .with_status(format!("Pasted {}", name.to_string_lossy()))
                .refreshed(Some(dest)),
            Err(e) => self.with_error(format!("Cannot paste: {e}")),
        }
    }

    // --- Zip / extract ---

    /// Opens the zip destination prompt for the selected folder.
    pub fn zip_requested(self) -> Self {
        match self.listing.selected_entry() {
            Some(entry) if entry.is_dir() => {
                let default = self
                    .listing
                    .current_dir()
                    .join(format!("{}.zip", entry.name()))
                    .to_string_lossy()
                    .into_owned();
                self.with_mode(AppMode::ZipDest(default))
            }
            Some(_) => self.with_error("Select a folder to zip".to_string()),
            None => self.with_status("Nothing selected".to_string()),
        }
    }

    pub fn zip_confirm(self, dest: &str) -> Self {
        let Some(src) = self.listing.selected_entry().map(|e| e.path().to_path_buf()) else {
            return self.with_mode(AppMode::Normal);
        };
        let dest = expand_home(dest.trim());
        match zip_directory(&src, &dest) {
            Ok(()) => self
                .with_mode(AppMode::Normal)
                .with_status(format!("Created {}", dest.display()))
                .refreshed(Some(dest)),
            Err(e) => self.with_error(format!("Cannot zip: {e}")),
        }
    }

    /// Opens the extraction destination prompt for the selected archive.
    pub fn extract_requested(self) -> Self {
        match self.listing.selected_entry() {
            Some(entry) if !entry.is_dir() && is_archive(entry.path()) => {
                let stem = entry
                    .path()
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "extracted".to_string());
                let default = self
                    .listing
                    .current_dir()
                    .join(stem)
                    .to_string_lossy()
                    .into_owned();
                self.with_mode(AppMode::ExtractDest(default))
            }
            Some(_) => self.with_error("Select a zip archive to extract".to_string()),
            None => self.with_status("Nothing selected".to_string()),
        }
    }

    pub fn extract_confirm(self, dest: &str) -> Self {
        let Some(src) = self.listing.selected_entry().map(|e| e.path().to_path_buf()) else {
            return self.with_mode(AppMode::Normal);
        };
        let dest = expand_home(dest.trim());
        match extract_archive(&src, &dest) {
            Ok(()) => self
                .with_mode(AppMode::Normal)
                .with_status(format!("Extracted to {}", dest.display()))
                .refreshed(Some(dest)),
            Err(e) => self.with_error(format!("Cannot extract: {e}")),
        }
    }

    // --- Menu / sort ---

    /// Dispatches the chosen context-menu entry.
    pub fn menu_confirm(self, selected: usize) -> Self {
        let Some(action) = MENU_ACTIONS.get(selected).copied() else {
            return self.with_mode(AppMode::Normal);
        };
        let app = self.with_mode(AppMode::Normal);
        match action {
            Action::CreateFolder => app.with_mode(AppMode::CreateFolder(String::new())),
            Action::Delete => app.delete_requested(),
            Action::Rename => app.rename_opened(),
            Action::Zip => app.zip_requested(),
            Action::Extract => app.extract_requested(),
            Action::Copy => app.copy_selected(),
            Action::Paste => app.paste_clipboard(),
            _ => app,
        }
    }

    /// Applies the chosen sort field, keeping the current direction.
    pub fn sort_confirm(self, selected: usize, direction: Option<SortDirection>) -> Self {
        let field = match selected {
            0 => SortField::Name,
            1 => SortField::Size,
            2 => SortField::Created,
            _ => SortField::Modified,
        };
        let direction = direction.unwrap_or_else(|| self.listing.sort_direction());
        let app = self.with_mode(AppMode::Normal);
        let result = app.listing.with_sort(field, direction);
        match result {
            Ok(listing) => {
                let msg = format!("Sort: {} {:?}", field.label(), direction);
                Self { listing, ..app }.with_status(msg)
            }
            Err(e) => app.with_error(e.to_string()),
        }
    }
}

/// Expands a leading `~` to the home directory.
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME") {
            let rest = rest.trim_start_matches('/');
            if rest.is_empty() {
                return PathBuf::from(home);
            }
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn app_in(tmp: &TempDir) -> App {
        App::new(
            tmp.path(),
            Config::default(),
            Keymap::default(),
            Theme::default(),
        )
        .unwrap()
    }

    fn listing_names(app: &App) -> Vec<String> {
        app.listing()
            .entries()
            .iter()
            .map(|e| e.name().to_string())
            .collect()
    }

    #[test]
    fn new_app_focuses_files_in_normal_mode() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();

        let app = app_in(&tmp);

        assert_eq!(app.focus(), PaneFocus::Files);
        assert!(matches!(app.mode(), AppMode::Normal));
        assert_eq!(listing_names(&app), vec!["a.txt"]);
        assert!(!app.should_quit());
    }

    #[test]
    fn switch_focus_toggles_panes() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp);

        let app = app.with_switched_focus();
        assert_eq!(app.focus(), PaneFocus::Tree);

        let app = app.with_switched_focus();
        assert_eq!(app.focus(), PaneFocus::Files);
    }

    #[test]
    fn entering_directory_syncs_tree_selection() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("inner.txt"), "").unwrap();

        let app = app_in(&tmp);
        let app = app.handle_command(Command::Enter);

        let expected = tmp.path().join("sub").canonicalize().unwrap();
        assert_eq!(app.listing().current_dir(), expected);
        assert_eq!(app.tree().selected_row().unwrap().path, expected);
    }

    #[test]
    fn enter_on_file_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("plain.txt"), "").unwrap();

        let app = app_in(&tmp);
        let before = app.listing().current_dir().to_path_buf();
        let app = app.handle_command(Command::Enter);

        assert_eq!(app.listing().current_dir(), before);
        assert!(matches!(app.mode(), AppMode::Normal));
    }

    #[test]
    fn go_up_and_back_round_trip() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let app = app_in(&tmp);
        let root = app.listing().current_dir().to_path_buf();

        let app = app.handle_command(Command::Enter);
        let app = app.handle_command(Command::GoUp);
        assert_eq!(app.listing().current_dir(), root);

        let app = app.handle_command(Command::GoBack);
        assert_eq!(
            app.listing().current_dir(),
            tmp.path().join("sub").canonicalize().unwrap()
        );
    }

    #[test]
    fn address_confirm_navigates_to_valid_directory() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();

        let app = app_in(&tmp);
        let app = app.address_confirm(&target.to_string_lossy());

        assert!(matches!(app.mode(), AppMode::Normal));
        assert_eq!(
            app.listing().current_dir(),
            target.canonicalize().unwrap()
        );
    }

    #[test]
    fn address_confirm_invalid_path_shows_error() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp);
        let before = app.listing().current_dir().to_path_buf();

        let app = app.address_confirm("/definitely/not/a/real/path");

        assert!(matches!(app.mode(), AppMode::Error(_)));
        assert_eq!(app.listing().current_dir(), before);
    }

    #[test]
    fn address_confirm_file_path_shows_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "").unwrap();

        let app = app_in(&tmp);
        let app = app.address_confirm(&file.to_string_lossy());

        assert!(matches!(app.mode(), AppMode::Error(_)));
    }

    #[test]
    fn address_bar_opens_prefilled() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp);
        let current = app.listing().current_dir().to_string_lossy().into_owned();

        let app = app.address_bar_opened();

        match app.mode() {
            AppMode::AddressBar(value) => assert_eq!(value, &current),
            other => panic!("expected AddressBar mode, got {other:?}"),
        }
    }

    #[test]
    fn search_selects_first_match_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("alpha.txt"), "").unwrap();
        fs::write(tmp.path().join("Beta.txt"), "").unwrap();
        fs::write(tmp.path().join("gamma.txt"), "").unwrap();

        let app = app_in(&tmp).with_mode(AppMode::Search(String::new()));
        let app = app
            .search_push_char('b')
            .search_push_char('e')
            .search_confirm();

        assert!(matches!(app.mode(), AppMode::Normal));
        assert_eq!(app.listing().selected_entry().unwrap().name(), "Beta.txt");
    }

    #[test]
    fn search_without_match_shows_not_found_dialog() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("alpha.txt"), "").unwrap();

        let app = app_in(&tmp).with_mode(AppMode::Search("zzz".to_string()));
        let app = app.search_confirm();

        match app.mode() {
            AppMode::Error(msg) => assert!(msg.contains("zzz")),
            other => panic!("expected Error mode, got {other:?}"),
        }
    }

    #[test]
    fn create_folder_refreshes_and_selects_it() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("existing.txt"), "").unwrap();

        let app = app_in(&tmp);
        let app = app.create_folder_confirm("fresh");

        assert!(tmp.path().join("fresh").is_dir());
        assert!(matches!(app.mode(), AppMode::Normal));
        assert_eq!(app.listing().selected_entry().unwrap().name(), "fresh");
        assert!(app.status_message().unwrap().contains("fresh"));
    }

    #[test]
    fn create_folder_duplicate_shows_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("taken")).unwrap();

        let app = app_in(&tmp);
        let app = app.create_folder_confirm("taken");

        assert!(matches!(app.mode(), AppMode::Error(_)));
    }

    #[test]
    fn delete_requested_asks_for_confirmation_by_default() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("doomed.txt"), "").unwrap();

        let app = app_in(&tmp);
        let app = app.delete_requested();

        assert!(matches!(
            app.mode(),
            AppMode::Confirm(ConfirmAction::Delete(_))
        ));
        assert!(tmp.path().join("doomed.txt").exists());
    }

    #[test]
    fn confirm_approved_deletes_recursively() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("doomed");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inner.txt"), "").unwrap();

        let app = app_in(&tmp);
        let app = app.delete_requested().confirm_approved();

        assert!(!dir.exists());
        assert!(matches!(app.mode(), AppMode::Normal));
        assert!(listing_names(&app).is_empty());
    }

    #[test]
    fn delete_without_confirmation_when_configured_off() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("doomed.txt"), "").unwrap();

        let mut config = Config::default();
        config.general.confirm_delete = false;
        let app = App::new(tmp.path(), config, Keymap::default(), Theme::default()).unwrap();

        let app = app.delete_requested();

        assert!(!tmp.path().join("doomed.txt").exists());
        assert!(matches!(app.mode(), AppMode::Normal));
    }

    #[test]
    fn rename_prefills_and_applies() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("before.txt"), "data").unwrap();

        let app = app_in(&tmp);
        let app = app.rename_opened();
        match app.mode() {
            AppMode::Rename(value) => assert_eq!(value, "before.txt"),
            other => panic!("expected Rename mode, got {other:?}"),
        }

        let app = app.rename_confirm("after.txt");

        assert!(!tmp.path().join("before.txt").exists());
        assert_eq!(
            fs::read_to_string(tmp.path().join("after.txt")).unwrap(),
            "data"
        );
        assert_eq!(app.listing().selected_entry().unwrap().name(), "after.txt");
    }

    #[test]
    fn copy_then_paste_into_subdirectory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("note.txt"), "payload").unwrap();
        fs::create_dir(tmp.path().join("dest")).unwrap();

        let app = app_in(&tmp);
        // cursor starts on "dest" (dirs first); move to note.txt to copy it
        let app = app.handle_command(Command::CursorDown).copy_selected();
        assert!(app.clipboard().is_some());

        let dest = tmp.path().join("dest");
        let app = app.opened(&dest).paste_clipboard();

        assert_eq!(
            fs::read_to_string(dest.join("note.txt")).unwrap(),
            "payload"
        );
        assert_eq!(app.listing().selected_entry().unwrap().name(), "note.txt");
    }

    #[test]
    fn paste_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("note.txt"), "original").unwrap();

        let app = app_in(&tmp);
        let app = app.copy_selected().paste_clipboard();

        assert!(matches!(app.mode(), AppMode::Error(_)));
        assert_eq!(
            fs::read_to_string(tmp.path().join("note.txt")).unwrap(),
            "original"
        );
    }

    #[test]
    fn zip_requested_on_file_shows_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("plain.txt"), "").unwrap();

        let app = app_in(&tmp);
        let app = app.zip_requested();

        assert!(matches!(app.mode(), AppMode::Error(_)));
    }

    #[test]
    fn zip_folder_then_extract_round_trips() {
        let tmp = TempDir::new().unwrap();
        let folder = tmp.path().join("bundle");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("inside.txt"), "kept").unwrap();

        let app = app_in(&tmp);
        // cursor is on "bundle" (only entry)
        let app = app.zip_requested();
        let default_dest = match app.mode() {
            AppMode::ZipDest(value) => value.clone(),
            other => panic!("expected ZipDest mode, got {other:?}"),
        };
        assert!(default_dest.ends_with("bundle.zip"));

        let app = app.zip_confirm(&default_dest);
        assert!(matches!(app.mode(), AppMode::Normal));
        assert!(tmp.path().join("bundle.zip").is_file());

        // The refresh after zipping parks the cursor on the new archive
        assert!(is_archive(
            app.listing().selected_entry().unwrap().path()
        ));
        let out = tmp.path().join("restored");
        let app = app.extract_requested();
        assert!(matches!(app.mode(), AppMode::ExtractDest(_)));
        let app = app.extract_confirm(&out.to_string_lossy());

        assert!(matches!(app.mode(), AppMode::Normal));
        assert_eq!(
            fs::read_to_string(out.join("bundle").join("inside.txt")).unwrap(),
            "kept"
        );
    }

    #[test]
    fn extract_requested_on_non_archive_shows_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("plain.txt"), "").unwrap();

        let app = app_in(&tmp);
        let app = app.extract_requested();

        assert!(matches!(app.mode(), AppMode::Error(_)));
    }

    #[test]
    fn menu_confirm_routes_to_create_folder_prompt() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp).with_mode(AppMode::Menu { selected: 0 });

        let app = app.menu_confirm(0);

        assert!(matches!(app.mode(), AppMode::CreateFolder(_)));
    }

    #[test]
    fn sort_confirm_applies_field_and_direction() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("big.txt"), "x".repeat(500)).unwrap();
        fs::write(tmp.path().join("small.txt"), "x").unwrap();

        let app = app_in(&tmp);
        let app = app.sort_confirm(1, Some(SortDirection::Descending));

        assert_eq!(listing_names(&app), vec!["big.txt", "small.txt"]);
        assert!(app.status_message().unwrap().contains("Size"));
    }

    #[test]
    fn navigate_and_set_sort_commands() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("big.txt"), "x".repeat(300)).unwrap();
        fs::write(sub.join("small.txt"), "x").unwrap();

        let app = app_in(&tmp);
        let app = app.handle_command(Command::Navigate(sub.clone()));
        assert_eq!(app.listing().current_dir(), sub.canonicalize().unwrap());

        let app = app.handle_command(Command::SetSort(
            SortField::Size,
            SortDirection::Descending,
        ));
        assert_eq!(listing_names(&app), vec!["big.txt", "small.txt"]);
    }

    #[test]
    fn go_forward_after_go_back() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let app = app_in(&tmp);
        let app = app.handle_command(Command::Enter);
        let sub = app.listing().current_dir().to_path_buf();

        let app = app.handle_command(Command::GoBack);
        let app = app.handle_command(Command::GoForward);

        assert_eq!(app.listing().current_dir(), sub);
        assert_eq!(app.tree().selected_row().unwrap().path, sub);
    }

    #[test]
    fn refresh_picks_up_external_changes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();

        let app = app_in(&tmp);
        fs::write(tmp.path().join("b.txt"), "").unwrap();

        let app = app.handle_command(Command::Refresh);

        assert_eq!(listing_names(&app), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn toggle_hidden_shows_dotfiles() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".secret"), "").unwrap();
        fs::write(tmp.path().join("open.txt"), "").unwrap();

        let app = app_in(&tmp);
        assert_eq!(listing_names(&app), vec!["open.txt"]);

        let app = app.handle_command(Command::ToggleHidden);
        assert_eq!(listing_names(&app), vec![".secret", "open.txt"]);
    }

    #[test]
    fn tree_enter_loads_listing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("branch")).unwrap();

        let app = app_in(&tmp).with_switched_focus();
        // tree cursor sits on the start directory; Enter expands and lists it
        let app = app.handle_command(Command::Enter);

        assert_eq!(
            app.listing().current_dir(),
            tmp.path().canonicalize().unwrap()
        );
        assert!(app.tree().selected_row().unwrap().expanded);
    }

    #[test]
    fn expand_home_substitutes_tilde() {
        let home = std::env::var("HOME").unwrap();
        assert_eq!(expand_home("~"), PathBuf::from(&home));
        assert_eq!(
            expand_home("~/projects"),
            PathBuf::from(&home).join("projects")
        );
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
    }
}
