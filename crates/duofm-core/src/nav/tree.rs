//! The left-pane folder tree model.
//!
//! [`DirTree`] mirrors the directory hierarchy beneath the filesystem
//! roots. It keeps a set of expanded directories and a flattened list of
//! visible [`TreeRow`]s that the UI renders directly. Children are read
//! from disk whenever the rows are rebuilt, so a rebuild after a
//! filesystem mutation is all it takes to bring the pane back in sync.
//!
//! All state transitions return a new `DirTree`, following the
//! project-wide immutability convention.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::fs::ops::list_subdirectories;
use crate::fs::volumes::Volume;

/// One visible row of the folder tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// Absolute path of the directory this row represents.
    pub path: PathBuf,
    /// Display label — the volume name for roots, the directory name below.
    pub name: String,
    /// Indentation level; roots are depth `0`.
    pub depth: usize,
    /// Whether this row's children are currently shown.
    pub expanded: bool,
}

/// Folder hierarchy state for the tree pane.
///
/// Invariants:
/// - the cursor always points into `rows` (or `0` when there are none);
/// - a row's children appear directly after it with `depth + 1`;
/// - collapsed subtrees contribute no rows;
/// - rows only exist for directories that were readable at the last rebuild.
#[derive(Debug, Clone)]
pub struct DirTree {
    roots: Vec<Volume>,
    expanded: BTreeSet<PathBuf>,
    rows: Vec<TreeRow>,
    selected: usize,
}

impl DirTree {
    /// Creates a tree showing only the given roots, all collapsed.
    pub fn new(roots: Vec<Volume>) -> Self {
        let expanded = BTreeSet::new();
        let rows = build_rows(&roots, &expanded);
        Self {
            roots,
            expanded,
            rows,
            selected: 0,
        }
    }

    /// Returns the flattened visible rows.
    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    /// Returns the index of the currently selected row.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the currently selected row, if any.
    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.selected)
    }

    /// Moves the cursor up by one. No-op at the top.
    pub fn with_cursor_up(self) -> Self {
        let selected = self.selected.saturating_sub(1);
        Self { selected, ..self }
    }

    /// Moves the cursor down by one. No-op at the bottom.
    pub fn with_cursor_down(self) -> Self {
        let selected = clamp_index(self.selected + 1, self.rows.len());
        Self { selected, ..self }
    }

    /// Jumps the cursor to the first row.
    pub fn with_cursor_top(self) -> Self {
        Self {
            selected: 0,
            ..self
        }
    }

    /// Jumps the cursor to the last row.
    pub fn with_cursor_bottom(self) -> Self {
        let selected = self.rows.len().saturating_sub(1);
        Self { selected, ..self }
    }

    /// Expands the selected row, revealing its subdirectories.
    ///
    /// Unreadable directories expand to nothing. No-op when nothing is
    /// selected or the row is already expanded.
    pub fn with_expanded(self) -> Self {
        let Some(path) = self.selected_row().map(|r| r.path.clone()) else {
            return self;
        };
        let mut expanded = self.expanded.clone();
        expanded.insert(path.clone());
        self.rebuilt(expanded, Some(path))
    }

    /// Collapses the selected row, hiding its whole subtree.
    pub fn with_collapsed(self) -> Self {
        let Some(path) = self.selected_row().map(|r| r.path.clone()) else {
            return self;
        };
        let mut expanded = self.expanded.clone();
        expanded.remove(&path);
        self.rebuilt(expanded, Some(path))
    }

    /// Toggles expansion of the selected row.
    pub fn with_toggle_expanded(self) -> Self {
        match self.selected_row() {
            Some(row) if row.expanded => self.with_collapsed(),
            Some(_) => self.with_expanded(),
            None => self,
        }
    }

    /// Expands every ancestor of `path` and moves the cursor onto it.
    ///
    /// Used when the listing or the address bar navigates somewhere the
    /// tree has not been opened yet. The target itself stays collapsed.
    /// When `path` is not reachable from any root the cursor is left alone.
    pub fn with_selected_path(self, path: &Path) -> Self {
        let mut expanded = self.expanded.clone();
        for ancestor in path.ancestors().skip(1) {
            expanded.insert(ancestor.to_path_buf());
        }
        self.rebuilt(expanded, Some(path.to_path_buf()))
    }

    /// Re-reads the children of every expanded directory.
    ///
    /// Expanded entries that no longer exist on disk are dropped. The
    /// cursor stays on the previously selected path when it survives,
    /// falls back to its nearest surviving ancestor, and is clamped
    /// otherwise.
    pub fn refreshed(self) -> Self {
        let mut expanded = self.expanded.clone();
        expanded.retain(|p| p.is_dir());

        let keep = self.selected_row().map(|r| r.path.clone());
        let fallback_index = self.selected;
        let mut tree = self.rebuilt(expanded, keep.clone());

        // Nearest surviving ancestor when the selected path is gone
        if let Some(path) = keep {
            if tree.selected_row().map(|r| &r.path) != Some(&path) {
                for ancestor in path.ancestors().skip(1) {
                    if let Some(idx) = tree.rows.iter().position(|r| r.path == ancestor) {
                        tree.selected = idx;
                        return tree;
                    }
                }
                tree.selected = clamp_index(fallback_index, tree.rows.len());
            }
        }
        tree
    }

    fn rebuilt(self, expanded: BTreeSet<PathBuf>, cursor_on: Option<PathBuf>) -> Self {
        let rows = build_rows(&self.roots, &expanded);
        let selected = cursor_on
            .and_then(|p| rows.iter().position(|r| r.path == p))
            .unwrap_or_else(|| clamp_index(self.selected, rows.len()));
        Self {
            roots: self.roots,
            expanded,
            rows,
            selected,
        }
    }
}

fn build_rows(roots: &[Volume], expanded: &BTreeSet<PathBuf>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    for root in roots {
        let is_expanded = expanded.contains(&root.path);
        rows.push(TreeRow {
            path: root.path.clone(),
            name: root.name.clone(),
            depth: 0,
            expanded: is_expanded,
        });
        if is_expanded {
            append_children(&root.path, 1, expanded, &mut rows);
        }
    }
    rows
}

fn append_children(dir: &Path, depth: usize, expanded: &BTreeSet<PathBuf>, rows: &mut Vec<TreeRow>) {
    let mut subdirs = match list_subdirectories(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("tree: cannot read {}: {e}", dir.display());
            return;
        }
    };
    subdirs.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));

    for sub in subdirs {
        let path = sub.path().to_path_buf();
        let is_expanded = expanded.contains(&path);
        rows.push(TreeRow {
            path: path.clone(),
            name: sub.name().to_string(),
            depth,
            expanded: is_expanded,
        });
        if is_expanded {
            append_children(&path, depth + 1, expanded, rows);
        }
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
