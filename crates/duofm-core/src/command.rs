//! Commands routed from the UI to the navigation models.
//!
//! The UI translates user input into [`Command`]s; the application state
//! processes them against the tree and the listing. This decoupling keeps
//! key handling free of navigation logic.

use std::path::PathBuf;

use crate::nav::search::{SortDirection, SortField};

/// An action the UI requests the navigation models to perform.
#[derive(Debug, Clone)]
pub enum Command {
    /// Navigate the listing (and the tree selection) to the given directory.
    Navigate(PathBuf),
    /// Move to the parent directory.
    GoUp,
    /// Navigate backward in history.
    GoBack,
    /// Navigate forward in history.
    GoForward,
    /// Re-read both panes from disk.
    Refresh,
    /// Toggle visibility of hidden (dot-prefixed) files.
    ToggleHidden,
    /// Change the sort field and direction.
    SetSort(SortField, SortDirection),
    /// Move the cursor up by one entry in the focused pane.
    CursorUp,
    /// Move the cursor down by one entry in the focused pane.
    CursorDown,
    /// Activate the current selection (open directory / expand tree row).
    Enter,
}
