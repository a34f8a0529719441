//! # Editor Session
//!
//! Composition root for one running editor: the document store, history,
//! clipboard, UI state and the content-edit coalescer. Every mutating
//! helper follows the same convention — snapshot the document as it
//! exists, then mutate — so a single undo reverts a single user action.

use crate::clipboard::ClipboardStore;
use crate::coalesce::EditCoalescer;
use crate::errors::EditorError;
use crate::history::HistoryStore;
use crate::state::EditorState;
use crate::storage::{Storage, EDITOR_STORAGE_KEY, WEBSITE_STORAGE_KEY};
use crate::store::{PersistedWebsiteState, WebsiteStore};
use pagecraft_model::{Animation, Block, BlockKind, BlockStyle, ContentMap, Group};
use std::time::Instant;

pub struct EditorSession {
    pub store: WebsiteStore,
    pub history: HistoryStore,
    pub clipboard: ClipboardStore,
    pub state: EditorState,
    coalescer: EditCoalescer,
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            store: WebsiteStore::new(),
            history: HistoryStore::new(),
            clipboard: ClipboardStore::new(),
            state: EditorState::new(),
            coalescer: EditCoalescer::new(),
        }
    }

    fn snapshot(&mut self, action: &str) {
        self.history.push_state(self.store.current(), action);
    }

    fn prune_selection(&mut self) {
        let store = &self.store;
        self.state
            .retain_selection(|id| store.block(id).is_some());
    }

    // ---- structural actions --------------------------------------------

    pub fn add_block(
        &mut self,
        kind: BlockKind,
        index: Option<usize>,
    ) -> Result<Block, EditorError> {
        // Validate before snapshotting so a failed add leaves no
        // dead history entry behind.
        if !self.store.registry().contains(kind) {
            return Err(EditorError::UnknownBlockKind(kind));
        }
        self.snapshot("Add block");
        let block = self.store.add_block(kind, index)?;
        self.state.record_recent_kind(kind);
        self.state.select_block(Some(block.id.clone()));
        Ok(block)
    }

    pub fn delete_block(&mut self, id: &str) -> bool {
        if self.store.block(id).is_none() {
            return false;
        }
        self.snapshot("Delete block");
        let deleted = self.store.delete_block(id);
        self.prune_selection();
        deleted
    }

    pub fn duplicate_block(&mut self, id: &str) -> Option<Block> {
        self.store.block(id)?;
        self.snapshot("Duplicate block");
        let copy = self.store.duplicate_block(id)?;
        self.state.select_block(Some(copy.id.clone()));
        Some(copy)
    }

    pub fn move_block(&mut self, id: &str, new_index: usize) -> bool {
        if self.store.block(id).is_none() {
            return false;
        }
        self.snapshot("Move block");
        self.store.move_block(id, new_index)
    }

    pub fn reorder_blocks(&mut self, active_id: &str, over_id: &str) -> bool {
        if active_id == over_id
            || self.store.block(active_id).is_none()
            || self.store.block(over_id).is_none()
        {
            return false;
        }
        self.snapshot("Reorder blocks");
        self.store.reorder_blocks(active_id, over_id)
    }

    // ---- per-block edits ------------------------------------------------

    /// Style edits snapshot on every discrete change, unlike content
    /// edits which coalesce.
    pub fn update_style(&mut self, id: &str, patch: BlockStyle) -> bool {
        if self.store.block(id).is_none() {
            return false;
        }
        self.snapshot("Update style");
        self.store.update_block_style(id, patch)
    }

    pub fn set_animation(&mut self, id: &str, animation: Option<Animation>) -> bool {
        if self.store.block(id).is_none() {
            return false;
        }
        self.snapshot("Set animation");
        self.store.set_block_animation(id, animation)
    }

    pub fn toggle_lock(&mut self, id: &str) -> bool {
        if self.store.block(id).is_none() {
            return false;
        }
        self.snapshot("Toggle lock");
        self.store.toggle_block_lock(id)
    }

    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        if self.store.block(id).is_none() {
            return false;
        }
        self.snapshot("Toggle visibility");
        self.store.toggle_block_visibility(id)
    }

    // ---- selection-wide actions ----------------------------------------

    fn selection_resolves(&self) -> bool {
        self.state
            .selected_block_ids()
            .iter()
            .any(|id| self.store.block(id).is_some())
    }

    pub fn delete_selected(&mut self) -> usize {
        if !self.selection_resolves() {
            return 0;
        }
        let ids = self.state.selected_block_ids().to_vec();
        self.snapshot("Delete blocks");
        let removed = self.store.delete_blocks(&ids);
        self.state.clear_selection();
        removed
    }

    pub fn duplicate_selected(&mut self) -> Vec<Block> {
        if !self.selection_resolves() {
            return Vec::new();
        }
        let ids = self.state.selected_block_ids().to_vec();
        self.snapshot("Duplicate blocks");
        self.store.duplicate_blocks(&ids)
    }

    pub fn lock_selected(&mut self) -> usize {
        if !self.selection_resolves() {
            return 0;
        }
        let ids = self.state.selected_block_ids().to_vec();
        self.snapshot("Lock blocks");
        self.store.lock_blocks(&ids)
    }

    pub fn unlock_selected(&mut self) -> usize {
        if !self.selection_resolves() {
            return 0;
        }
        let ids = self.state.selected_block_ids().to_vec();
        self.snapshot("Unlock blocks");
        self.store.unlock_blocks(&ids)
    }

    pub fn hide_selected(&mut self) -> usize {
        if !self.selection_resolves() {
            return 0;
        }
        let ids = self.state.selected_block_ids().to_vec();
        self.snapshot("Hide blocks");
        self.store.hide_blocks(&ids)
    }

    pub fn show_selected(&mut self) -> usize {
        if !self.selection_resolves() {
            return 0;
        }
        let ids = self.state.selected_block_ids().to_vec();
        self.snapshot("Show blocks");
        self.store.show_blocks(&ids)
    }

    /// Put the current selection into a new group.
    pub fn group_selection(&mut self, name: &str) -> Option<Group> {
        if !self.selection_resolves() {
            return None;
        }
        let ids = self.state.selected_block_ids().to_vec();
        self.snapshot("Group blocks");
        Some(self.store.create_group(name, &ids))
    }

    pub fn delete_group(&mut self, id: &str) -> bool {
        if self.store.current().group(id).is_none() {
            return false;
        }
        self.snapshot("Delete group");
        self.store.delete_group(id)
    }

    // ---- clipboard ------------------------------------------------------

    pub fn copy_selected(&mut self) -> bool {
        let Some(id) = self.state.selected_block_id() else {
            return false;
        };
        let Some(block) = self.store.block(id) else {
            return false;
        };
        let block = block.clone();
        self.clipboard.copy_block(&block);
        true
    }

    pub fn paste(&mut self) -> Option<Block> {
        let block = self.clipboard.paste_block(self.store.ids_mut())?;
        self.snapshot("Paste block");
        let inserted = self.store.insert_block(block, None);
        self.state.select_block(Some(inserted.id.clone()));
        Some(inserted)
    }

    // ---- debounced content edits ---------------------------------------

    pub fn queue_content_edit(&mut self, block_id: &str, patch: ContentMap, now: Instant) {
        self.coalescer.queue(block_id, patch, now);
    }

    /// Apply every batch whose debounce window elapsed: one history
    /// snapshot per batch, never one per keystroke.
    pub fn flush_edits(&mut self, now: Instant) -> usize {
        let batches = self.coalescer.flush_due(now);
        self.apply_batches(batches)
    }

    fn commit_pending_edits(&mut self) -> usize {
        let batches = self.coalescer.flush_all();
        self.apply_batches(batches)
    }

    fn apply_batches(&mut self, batches: Vec<(String, ContentMap)>) -> usize {
        let mut applied = 0;
        for (id, patch) in batches {
            // The block may have been deleted while the edit was pending.
            if self.store.block(&id).is_none() {
                continue;
            }
            self.snapshot("Edit content");
            if self.store.update_block_content(&id, patch) {
                applied += 1;
            }
        }
        applied
    }

    // ---- history --------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        // Pending edits land first so they are undoable as their own step
        // rather than resurfacing on top of the restored document.
        self.commit_pending_edits();
        match self.history.undo(self.store.current()) {
            Some(site) => {
                self.store.replace_current(site);
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.commit_pending_edits();
        match self.history.redo(self.store.current()) {
            Some(site) => {
                self.store.replace_current(site);
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    // ---- persistence ----------------------------------------------------

    pub fn save(&self, storage: &Storage) -> Result<(), EditorError> {
        storage.save(WEBSITE_STORAGE_KEY, &self.store.persisted())?;
        storage.save(EDITOR_STORAGE_KEY, &self.state.persisted())?;
        Ok(())
    }

    /// Restore persisted state. History refers to documents that no
    /// longer exist after a restore, so it is cleared.
    pub fn load(&mut self, storage: &Storage) {
        if let Some(state) = storage.load::<PersistedWebsiteState>(WEBSITE_STORAGE_KEY) {
            self.store.hydrate(state);
        }
        if let Some(state) = storage.load(EDITOR_STORAGE_KEY) {
            self.state.hydrate(state);
        }
        self.history.clear();
        self.state.clear_selection();
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
