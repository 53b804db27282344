//! The right-pane file listing model.
//!
//! [`Listing`] owns everything the file table needs: the current directory,
//! its sorted and filtered entries, the cursor, view settings, and the
//! navigation history. All state transitions return a new `Listing`,
//! following the project-wide immutability convention.

use std::path::{Path, PathBuf};

use crate::error::CoreResult;
use crate::fs::entry::FileEntry;
use crate::fs::ops::read_directory;
use crate::nav::history::{History, HistoryEntry};
use crate::nav::search::{filter_hidden, sort_entries, SortDirection, SortField};

/// View settings that shape how a directory is presented.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub show_hidden: bool,
    pub dirs_first: bool,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_hidden: false,
            dirs_first: true,
            sort_field: SortField::Name,
            sort_direction: SortDirection::Ascending,
        }
    }
}

/// A directory listing with cursor selection and navigation history.
///
/// Selection is automatically clamped to valid bounds.
#[derive(Debug, Clone)]
pub struct Listing {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    selected: usize,
    options: ViewOptions,
    history: History,
}

impl Listing {
    /// Creates a listing for `path` with the given view options.
    ///
    /// The path is canonicalized and its entries read, sorted, and filtered.
    /// The cursor starts at index `0` and history is empty.
    pub fn from_dir(path: &Path, options: ViewOptions) -> CoreResult<Self> {
        let current_dir = path.canonicalize()?;
        let entries = load_entries(&current_dir, options)?;
        Ok(Self {
            current_dir,
            entries,
            selected: 0,
            options,
            history: History::new(),
        })
    }

    /// Returns the directory currently being displayed.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Returns the visible entries, sorted and filtered.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns the index of the currently selected entry.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns a reference to the selected entry, if any.
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected)
    }

    pub fn show_hidden(&self) -> bool {
        self.options.show_hidden
    }

    pub fn sort_field(&self) -> SortField {
        self.options.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.options.sort_direction
    }

    /// Returns `true` if there is navigation history to go back to.
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Returns `true` if there is navigation history to go forward to.
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Navigates into a directory, pushing the current location onto history.
    pub fn navigate_to(&self, path: &Path) -> CoreResult<Self> {
        let target = path.canonicalize()?;
        let entries = load_entries(&target, self.options)?;
        let history = self
            .history
            .push(self.current_dir.clone(), self.selected);
        Ok(Self {
            current_dir: target,
            entries,
            selected: 0,
            options: self.options,
            history,
        })
    }

    /// Navigates to the parent directory. No-op at a filesystem root.
    pub fn go_up(&self) -> CoreResult<Self> {
        match self.current_dir.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.navigate_to(&parent)
            }
            None => Ok(self.clone()),
        }
    }

    /// Navigates backward in history, restoring the remembered cursor.
    ///
    /// Returns `Ok(None)` if there is no history.
    pub fn go_back(&self) -> CoreResult<Option<Self>> {
        let current = HistoryEntry {
            path: self.current_dir.clone(),
            cursor: self.selected,
        };
        let Some((history, target)) = self.history.go_back(current) else {
            return Ok(None);
        };
        let entries = load_entries(&target.path, self.options)?;
        let selected = clamp_index(target.cursor, entries.len());
        Ok(Some(Self {
            current_dir: target.path,
            entries,
            selected,
            options: self.options,
            history,
        }))
    }

    /// Navigates forward in history, restoring the remembered cursor.
    ///
    /// Returns `Ok(None)` if there is no forward entry.
    pub fn go_forward(&self) -> CoreResult<Option<Self>> {
        let current = HistoryEntry {
            path: self.current_dir.clone(),
            cursor: self.selected,
        };
        let Some((history, target)) = self.history.go_forward(current) else {
            return Ok(None);
        };
        let entries = load_entries(&target.path, self.options)?;
        let selected = clamp_index(target.cursor, entries.len());
        Ok(Some(Self {
            current_dir: target.path,
            entries,
            selected,
            options: self.options,
            history,
        }))
    }

    /// Re-reads the current directory.
    ///
    /// The cursor stays on the entry with the same name when it still
    /// exists; otherwise the index is clamped to the new bounds.
    pub fn refreshed(&self) -> CoreResult<Self> {
        let entries = load_entries(&self.current_dir, self.options)?;
        let selected = self
            .selected_entry()
            .and_then(|old| entries.iter().position(|e| e.name() == old.name()))
            .unwrap_or_else(|| clamp_index(self.selected, entries.len()));
        Ok(Self {
            current_dir: self.current_dir.clone(),
            entries,
            selected,
            options: self.options,
            history: self.history.clone(),
        })
    }

    /// Moves the cursor up by one. No-op at the top.
    pub fn with_cursor_up(self) -> Self {
        let selected = self.selected.saturating_sub(1);
        Self { selected, ..self }
    }

    /// Moves the cursor down by one. No-op at the bottom.
    pub fn with_cursor_down(self) -> Self {
        let selected = clamp_index(self.selected + 1, self.entries.len());
        Self { selected, ..self }
    }

    /// Jumps the cursor to the first entry.
    pub fn with_cursor_top(self) -> Self {
        Self {
            selected: 0,
            ..self
        }
    }

    /// Jumps the cursor to the last entry.
    pub fn with_cursor_bottom(self) -> Self {
        let selected = self.entries.len().saturating_sub(1);
        Self { selected, ..self }
    }

    /// Jumps the cursor to `index`, clamped to bounds.
    pub fn with_cursor_to(self, index: usize) -> Self {
        let selected = clamp_index(index, self.entries.len());
        Self { selected, ..self }
    }

    /// Moves the cursor to the entry at `path`, if it is in the listing.
    pub fn with_cursor_on(self, path: &Path) -> Self {
        match self.entries.iter().position(|e| e.path() == path) {
            Some(idx) => Self {
                selected: idx,
                ..self
            },
            None => self,
        }
    }

    /// Toggles hidden-file visibility, reloading entries.
    pub fn with_toggle_hidden(&self) -> CoreResult<Self> {
        let options = ViewOptions {
            show_hidden: !self.options.show_hidden,
            ..self.options
        };
        self.with_options(options)
    }

    /// Applies a specific sort field and direction, reloading entries.
    pub fn with_sort(&self, field: SortField, direction: SortDirection) -> CoreResult<Self> {
        let options = ViewOptions {
            sort_field: field,
            sort_direction: direction,
            ..self.options
        };
        self.with_options(options)
    }

    fn with_options(&self, options: ViewOptions) -> CoreResult<Self> {
        let entries = load_entries(&self.current_dir, options)?;
        let selected = self
            .selected_entry()
            .and_then(|old| entries.iter().position(|e| e.name() == old.name()))
            .unwrap_or(0);
        Ok(Self {
            current_dir: self.current_dir.clone(),
            entries,
            selected,
            options,
            history: self.history.clone(),
        })
    }
}

fn load_entries(dir: &Path, options: ViewOptions) -> CoreResult<Vec<FileEntry>> {
    let raw = read_directory(dir)?;
    let sorted = sort_entries(
        &raw,
        options.sort_field,
        options.sort_direction,
        options.dirs_first,
    );
    Ok(filter_hidden(&sorted, options.show_hidden))
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
