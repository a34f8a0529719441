//! # Undo/Redo History
//!
//! Two stacks of full-document snapshots. Consumers snapshot the document
//! immediately *before* a mutation (`push_state`, then mutate, in the same
//! logical action); `undo`/`redo` exchange the live document for the
//! snapshot to restore.
//!
//! ## Design
//!
//! - Snapshots are owned deep clones, so a later mutation of the live
//!   document can never invalidate one.
//! - `undo(current)` and `redo(current)` take the live document and push
//!   it onto the opposite stack before popping, so the returned snapshot
//!   is always a complete restore target. `None` strictly means "nothing
//!   to undo/redo — leave the canvas unchanged".
//! - A new `push_state` clears the redo stack: acting after an undo
//!   discards the branch that was redone from.
//! - Depth is bounded; the oldest entry is evicted on overflow. Losing
//!   undo steps past the limit is a product decision, not an error.

use chrono::{DateTime, Utc};
use pagecraft_model::Website;

/// Default maximum number of undo levels.
pub const MAX_HISTORY_DEPTH: usize = 30;

/// One history snapshot: the full document as it existed before the
/// labelled action ran.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub website: Website,
}

impl HistoryEntry {
    fn new(action: &str, website: Website) -> Self {
        Self {
            timestamp: Utc::now(),
            action: action.to_string(),
            website,
        }
    }
}

/// Undo/redo stacks over full-document snapshots.
#[derive(Debug)]
pub struct HistoryStore {
    past: Vec<HistoryEntry>,
    future: Vec<HistoryEntry>,
    max_depth: usize,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_HISTORY_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_depth,
        }
    }

    /// Record the document as it exists immediately before a mutation.
    /// Clears the redo stack and evicts the oldest entry past the depth
    /// limit.
    pub fn push_state(&mut self, website: &Website, action: &str) {
        self.past.push(HistoryEntry::new(action, website.clone()));

        if self.max_depth > 0 && self.past.len() > self.max_depth {
            let evicted = self.past.remove(0);
            tracing::debug!(action = %evicted.action, "evicted oldest history entry");
        }

        self.future.clear();
    }

    /// Undo the most recent action: the caller passes the live document,
    /// which moves to the redo stack, and receives the snapshot to
    /// restore. `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &Website) -> Option<Website> {
        let entry = self.past.pop()?;
        self.future
            .push(HistoryEntry::new(&entry.action, current.clone()));
        Some(entry.website)
    }

    /// Redo the most recently undone action. Symmetric with `undo`.
    pub fn redo(&mut self, current: &Website) -> Option<Website> {
        let entry = self.future.pop()?;
        self.past
            .push(HistoryEntry::new(&entry.action, current.clone()));
        Some(entry.website)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Label of the action the next `undo` would revert.
    pub fn undo_description(&self) -> Option<&str> {
        self.past.last().map(|entry| entry.action.as_str())
    }

    /// Label of the action the next `redo` would replay.
    pub fn redo_description(&self) -> Option<&str> {
        self.future.last().map(|entry| entry.action.as_str())
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str) -> Website {
        Website::new(format!("w-{name}"), name)
    }

    #[test]
    fn test_history_store_creation() {
        let history = HistoryStore::new();
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_returns_previous_snapshot() {
        let mut history = HistoryStore::new();
        let d0 = site("zero");
        let d1 = site("one");

        history.push_state(&d0, "Rename");
        let restored = history.undo(&d1).unwrap();

        assert_eq!(restored.name, "zero");
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let replayed = history.redo(&restored).unwrap();
        assert_eq!(replayed.name, "one");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_on_empty_history_is_none() {
        let mut history = HistoryStore::new();
        let d0 = site("zero");

        assert!(history.undo(&d0).is_none());
        assert!(history.redo(&d0).is_none());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = HistoryStore::new();
        let d0 = site("zero");
        let d1 = site("one");

        history.push_state(&d0, "First");
        history.undo(&d1);
        assert!(history.can_redo());

        history.push_state(&d0, "Second");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut history = HistoryStore::with_max_depth(2);

        history.push_state(&site("a"), "A");
        history.push_state(&site("b"), "B");
        history.push_state(&site("c"), "C");

        assert_eq!(history.undo_levels(), 2);
        // Oldest entry (A) was evicted; the bottom of the stack is B.
        let current = site("current");
        history.undo(&current);
        let restored = history.undo(&current).unwrap();
        assert_eq!(restored.name, "b");
    }

    #[test]
    fn test_descriptions_track_next_operation() {
        let mut history = HistoryStore::new();
        let d0 = site("zero");
        let d1 = site("one");

        history.push_state(&d0, "Add block");
        assert_eq!(history.undo_description(), Some("Add block"));
        assert_eq!(history.redo_description(), None);

        history.undo(&d1);
        assert_eq!(history.undo_description(), None);
        assert_eq!(history.redo_description(), Some("Add block"));
    }
}
