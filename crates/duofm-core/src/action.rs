//! Unified action system for DuoFM.
//!
//! Every user-triggerable action is represented by the [`Action`] enum.
//! [`ActionRegistry`] provides metadata (name, description, category) used
//! to resolve keymap identifiers and to render the help popup.

/// Every user-triggerable action in DuoFM.
///
/// Variants carry no parameters — context is determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    EnterDir,
    GoParent,
    GoHome,
    GoBack,
    GoForward,
    Refresh,
    SwitchPane,
    AddressBar,
    // File Operations
    CreateFolder,
    Delete,
    Rename,
    Copy,
    Paste,
    // Archive
    Zip,
    Extract,
    // View
    ToggleHidden,
    Search,
    SortSelect,
    ContextMenu,
    // System
    Help,
    Quit,
}

/// Broad category for grouping actions in the help popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    FileOps,
    Archive,
    View,
    System,
}

impl ActionCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::FileOps => "File",
            Self::Archive => "Archive",
            Self::View => "View",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action — used by the keymap loader and help popup.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in `keymap.toml` (e.g. `"cursor_up"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Cursor Up"`).
    pub name: &'static str,
    /// Short description (e.g. `"Move cursor up one entry"`).
    pub description: &'static str,
    pub category: ActionCategory,
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    /// Builds the registry with one descriptor per [`Action`] variant.
    pub fn new() -> Self {
        use Action::*;
        use ActionCategory::*;

        let descriptors = vec![
            desc(CursorUp, "cursor_up", "Cursor Up", "Move cursor up one entry", Navigation),
            desc(CursorDown, "cursor_down", "Cursor Down", "Move cursor down one entry", Navigation),
            desc(CursorTop, "cursor_top", "Cursor Top", "Jump to the first entry", Navigation),
            desc(CursorBottom, "cursor_bottom", "Cursor Bottom", "Jump to the last entry", Navigation),
            desc(EnterDir, "enter", "Open", "Open the selected directory", Navigation),
            desc(GoParent, "go_parent", "Go Up", "Go to the parent directory", Navigation),
            desc(GoHome, "go_home", "Go Home", "Go to the home directory", Navigation),
            desc(GoBack, "go_back", "Back", "Go back in navigation history", Navigation),
            desc(GoForward, "go_forward", "Forward", "Go forward in navigation history", Navigation),
            desc(Refresh, "refresh", "Refresh", "Re-read both panes from disk", Navigation),
            desc(SwitchPane, "switch_pane", "Switch Pane", "Move focus between tree and files", Navigation),
            desc(AddressBar, "address_bar", "Open Path", "Type an absolute path to open", Navigation),
            desc(CreateFolder, "create_folder", "New Folder", "Create a folder in the current directory", FileOps),
            desc(Delete, "delete", "Delete", "Delete the selected entry", FileOps),
            desc(Rename, "rename", "Rename", "Rename the selected entry", FileOps),
            desc(Copy, "copy", "Copy", "Remember the selected entry for pasting", FileOps),
            desc(Paste, "paste", "Paste", "Copy the remembered entry here", FileOps),
            desc(Zip, "zip", "Zip Folder", "Archive the selected folder as a zip", Archive),
            desc(Extract, "extract", "Extract Zip", "Extract the selected zip archive", Archive),
            desc(ToggleHidden, "toggle_hidden", "Toggle Hidden", "Show or hide dotfiles", View),
            desc(Search, "search", "Search", "Find an entry by name", View),
            desc(SortSelect, "sort", "Sort", "Choose the sort field", View),
            desc(ContextMenu, "context_menu", "Menu", "Open the operations menu", View),
            desc(Help, "help", "Help", "Show key bindings", System),
            desc(Quit, "quit", "Quit", "Exit the application", System),
        ];

        Self { descriptors }
    }

    /// Returns every descriptor in registration order.
    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Looks up a descriptor by its snake-case identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Looks up the descriptor for an action.
    pub fn find(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }
}

fn desc(
    action: Action,
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ActionCategory,
) -> ActionDescriptor {
    ActionDescriptor {
        action,
        id,
        name,
        description,
        category,
    }
}
