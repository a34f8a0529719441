//! # Content Edit Coalescing
//!
//! The debounce point between "user types a character" and "document
//! store call". Rapid keystrokes against one block merge into a single
//! pending patch; the batch is released once its window elapses, so the
//! caller takes one history snapshot per batch instead of one per
//! keystroke. A granularity trade-off for undo usability, not a
//! correctness mechanism.
//!
//! Callers supply `Instant`s, which keeps the type deterministic and the
//! tests free of sleeps.

use pagecraft_model::ContentMap;
use std::time::{Duration, Instant};

/// Default debounce window.
pub const DEFAULT_COALESCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug)]
struct PendingEdit {
    patch: ContentMap,
    deadline: Instant,
}

/// Per-block pending content patches, in first-queued order.
#[derive(Debug)]
pub struct EditCoalescer {
    window: Duration,
    pending: Vec<(String, PendingEdit)>,
}

impl EditCoalescer {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_COALESCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: Vec::new(),
        }
    }

    /// Merge a patch into the pending edit for a block and push its
    /// deadline out by the window. Later values win per field.
    pub fn queue(&mut self, block_id: &str, patch: ContentMap, now: Instant) {
        let deadline = now + self.window;
        if let Some((_, edit)) = self.pending.iter_mut().find(|(id, _)| id == block_id) {
            for (key, value) in patch {
                edit.patch.insert(key, value);
            }
            edit.deadline = deadline;
        } else {
            self.pending
                .push((block_id.to_string(), PendingEdit { patch, deadline }));
        }
    }

    /// Drain every batch whose window has elapsed.
    pub fn flush_due(&mut self, now: Instant) -> Vec<(String, ContentMap)> {
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].1.deadline <= now {
                let (id, edit) = self.pending.remove(index);
                due.push((id, edit.patch));
            } else {
                index += 1;
            }
        }
        due
    }

    /// Drain everything regardless of deadline (blur, unmount, undo).
    pub fn flush_all(&mut self) -> Vec<(String, ContentMap)> {
        self.pending
            .drain(..)
            .map(|(id, edit)| (id, edit.patch))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_blocks(&self) -> usize {
        self.pending.len()
    }
}

impl Default for EditCoalescer {
    fn default() -> Self {
        Self::new()
    }
}
