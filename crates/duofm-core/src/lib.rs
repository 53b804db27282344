//! DuoFM core library — UI-agnostic file browser logic.
//!
//! `duofm-core` provides the foundational types and operations for building
//! a two-pane file browser frontend. It is intentionally decoupled from any
//! UI framework so that the TUI (`duofm-tui`) and a future GUI frontend can
//! share the same underlying logic.
//!
//! # Modules
//!
//! - [`fs`] — File system abstractions: [`FileEntry`], directory reads and
//!   mutations, zip archives, root enumeration.
//! - [`nav`] — Navigation logic: the folder tree, the file listing, history,
//!   sorting, and name search.
//! - [`config`] — User-facing configuration (TOML settings, keymap, theme).
//! - [`command`] — Command types for UI → core dispatch.
//! - [`action`] — The user-action registry backing keymaps and help.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias
//!   ([`CoreResult`]).

pub mod action;
pub mod command;
pub mod config;
pub mod error;
pub mod fs;
pub mod nav;

pub use error::{CoreError, CoreResult};

pub use command::Command;
pub use fs::archive::{extract_archive, is_archive, zip_directory};
pub use fs::entry::FileEntry;
pub use fs::ops::{
    copy_entry, create_directory, delete_entry, list_subdirectories, read_directory, rename_entry,
};
pub use fs::volumes::{list_roots, Volume};
pub use nav::history::History;
pub use nav::listing::{Listing, ViewOptions};
pub use nav::search::{
    filter_hidden, find_first_match, matching_indices, sort_entries, SortDirection, SortField,
};
pub use nav::tree::{DirTree, TreeRow};

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which causes Korean Hangul
/// characters to appear as individual Jamo. This helper re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
