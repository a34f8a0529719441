//! # Clipboard
//!
//! Single-slot block clipboard, independent of document lifetime: the
//! copied block survives deletion of its source. Copy/paste of the
//! clipboard itself is not undoable — only the document insertion the
//! caller performs with the pasted block is.

use pagecraft_model::{Block, IdGenerator};

#[derive(Debug, Default)]
pub struct ClipboardStore {
    slot: Option<Block>,
}

impl ClipboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-clone a block into the slot, overwriting any previous
    /// contents. There is no multi-item clipboard.
    pub fn copy_block(&mut self, block: &Block) {
        self.slot = Some(block.clone());
    }

    /// A fresh clone with a newly generated id, or None if the clipboard
    /// is empty. Group membership is document-scoped, so the paste drops
    /// it. The slot is kept — pasting twice yields two blocks.
    pub fn paste_block(&self, ids: &mut IdGenerator) -> Option<Block> {
        let mut copy = self.slot.clone()?;
        copy.id = ids.new_id();
        copy.group_id = None;
        Some(copy)
    }

    /// Used to enable/disable paste affordances.
    pub fn has_clipboard(&self) -> bool {
        self.slot.is_some()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
