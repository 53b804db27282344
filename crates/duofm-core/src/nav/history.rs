//! Navigation history with back/forward support.

use std::path::PathBuf;

/// A single remembered location: a directory and the cursor position the
/// listing had when the user left it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: PathBuf,
    pub cursor: usize,
}

/// Immutable navigation history with back/forward stacks.
///
/// Every mutation returns a **new** `History` instance, following the
/// project-wide immutability convention. Navigating forward after going
/// back is supported; pushing a new location clears the forward stack
/// (same semantics as a web browser).
#[derive(Debug, Clone, Default)]
pub struct History {
    back_stack: Vec<HistoryEntry>,
    forward_stack: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a location onto the back stack and clears the forward stack.
    ///
    /// Returns a new `History`.
    pub fn push(&self, path: PathBuf, cursor: usize) -> Self {
        let mut back_stack = self.back_stack.clone();
        back_stack.push(HistoryEntry { path, cursor });
        Self {
            back_stack,
            forward_stack: Vec::new(),
        }
    }

    /// Go back one step, recording `current` on the forward stack.
    ///
    /// Returns the new `History` and the location to navigate to, or `None`
    /// if the back stack is empty.
    pub fn go_back(&self, current: HistoryEntry) -> Option<(Self, HistoryEntry)> {
        if self.back_stack.is_empty() {
            return None;
        }
        let mut back_stack = self.back_stack.clone();
        let target = back_stack.pop()?;
        let mut forward_stack = self.forward_stack.clone();
        forward_stack.push(current);
        Some((
            Self {
                back_stack,
                forward_stack,
            },
            target,
        ))
    }

    /// Go forward one step, recording `current` on the back stack.
    ///
    /// Returns the new `History` and the location to navigate to, or `None`
    /// if the forward stack is empty.
    pub fn go_forward(&self, current: HistoryEntry) -> Option<(Self, HistoryEntry)> {
        if self.forward_stack.is_empty() {
            return None;
        }
        let mut forward_stack = self.forward_stack.clone();
        let target = forward_stack.pop()?;
        let mut back_stack = self.back_stack.clone();
        back_stack.push(current);
        Some((
            Self {
                back_stack,
                forward_stack,
            },
            target,
        ))
    }

    /// Returns `true` if there is at least one entry on the back stack.
    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Returns `true` if there is at least one entry on the forward stack.
    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }
}
