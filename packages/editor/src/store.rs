//! # Website Store
//!
//! Sole writer of the block document. Every operation is applied to the
//! current website, re-derives a contiguous order index where structure
//! changed, and stamps the update timestamp.
//!
//! ## Miss semantics
//!
//! Lookups by id that miss are benign no-ops across the whole API:
//! a debounced edit may land after its block was deleted, and that race
//! must never crash the store. The signatures make the policy explicit —
//! `bool` ("did anything change") for by-id setters, `Option` where a
//! block is returned, `usize` counts for bulk operations. The single
//! typed error is `add_block` with an unregistered kind, which reflects a
//! programming error rather than a data race.

use crate::errors::EditorError;
use pagecraft_model::{
    Animation, Block, BlockKind, BlockRegistry, BlockStyle, Breakpoint, ContentMap, Group,
    IdGenerator, SiteSettings, Website,
};
use serde::{Deserialize, Serialize};

/// Subset of store state that survives a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedWebsiteState {
    pub websites: Vec<Website>,
    pub current_website_id: String,
}

/// Owns the websites list and the current document. Constructible per
/// test case; nothing in here is process-global.
#[derive(Debug)]
pub struct WebsiteStore {
    websites: Vec<Website>,
    current_id: String,
    registry: BlockRegistry,
    ids: IdGenerator,
}

/// Re-derive the contiguous order index after a structural change.
fn reindex_blocks(site: &mut Website) {
    for (index, block) in site.blocks.iter_mut().enumerate() {
        block.order = index;
    }
}

fn reindex_groups(site: &mut Website) {
    for (index, group) in site.groups.iter_mut().enumerate() {
        group.order = index;
    }
}

impl WebsiteStore {
    pub fn new() -> Self {
        Self::with_registry(BlockRegistry::default())
    }

    pub fn with_registry(registry: BlockRegistry) -> Self {
        let mut ids = IdGenerator::new("pagecraft");
        let site = Website::new(ids.new_id(), "Untitled Site");
        let current_id = site.id.clone();
        Self {
            websites: vec![site],
            current_id,
            registry,
            ids,
        }
    }

    // ---- websites -------------------------------------------------------

    /// The current document. The store maintains the invariant that the
    /// websites list is never empty and `current_id` resolves.
    pub fn current(&self) -> &Website {
        self.websites
            .iter()
            .find(|w| w.id == self.current_id)
            .unwrap_or(&self.websites[0])
    }

    fn current_mut(&mut self) -> &mut Website {
        let index = self
            .websites
            .iter()
            .position(|w| w.id == self.current_id)
            .unwrap_or(0);
        &mut self.websites[index]
    }

    pub fn websites(&self) -> &[Website] {
        &self.websites
    }

    /// Create a new empty website and make it current.
    pub fn create_website(&mut self, name: impl Into<String>) -> Website {
        let site = Website::new(self.ids.new_id(), name);
        self.current_id = site.id.clone();
        self.websites.push(site.clone());
        site
    }

    pub fn set_current_website(&mut self, id: &str) -> bool {
        if self.websites.iter().any(|w| w.id == id) {
            self.current_id = id.to_string();
            true
        } else {
            false
        }
    }

    pub fn rename_website(&mut self, name: impl Into<String>) {
        let name = name.into();
        let site = self.current_mut();
        site.slug = pagecraft_model::slugify(&name);
        site.name = name;
        site.touch();
    }

    pub fn update_settings(&mut self, f: impl FnOnce(&mut SiteSettings)) {
        let site = self.current_mut();
        f(&mut site.settings);
        site.touch();
    }

    /// Swap in a restored snapshot (the undo/redo path). The snapshot
    /// carries its own timestamps, so this does not touch `updated_at`.
    pub fn replace_current(&mut self, site: Website) {
        self.current_id = site.id.clone();
        if let Some(slot) = self.websites.iter_mut().find(|w| w.id == site.id) {
            *slot = site;
        } else {
            self.websites.push(site);
        }
    }

    // ---- block lookups --------------------------------------------------

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.current().block(id)
    }

    pub fn ordered_blocks(&self) -> Vec<&Block> {
        self.current().ordered_blocks()
    }

    pub fn blocks_in_group(&self, group_id: &str) -> Vec<&Block> {
        self.current().blocks_in_group(group_id)
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    // ---- block mutations ------------------------------------------------

    /// Add a block of `kind` with its registered defaults, inserted at
    /// `index` (clamped to the block count) or appended. Returns the
    /// created block.
    pub fn add_block(
        &mut self,
        kind: BlockKind,
        index: Option<usize>,
    ) -> Result<Block, EditorError> {
        let (content, style) = match self.registry.definition(kind) {
            Some(def) => (def.default_content.clone(), def.default_style.clone()),
            None => return Err(EditorError::UnknownBlockKind(kind)),
        };

        let block = Block::new(self.ids.new_id(), kind, content, style);
        Ok(self.insert_block(block, index))
    }

    /// Insert an already-built block (the paste path). The caller is
    /// responsible for id uniqueness; `ClipboardStore::paste_block`
    /// regenerates ids.
    pub fn insert_block(&mut self, block: Block, index: Option<usize>) -> Block {
        let site = self.current_mut();
        let at = index.unwrap_or(site.blocks.len()).min(site.blocks.len());
        site.blocks.insert(at, block);
        reindex_blocks(site);
        site.touch();
        site.blocks[at].clone()
    }

    /// General field update by id. Returns false (and leaves the document
    /// untouched) when the block no longer exists.
    pub fn update_block(&mut self, id: &str, f: impl FnOnce(&mut Block)) -> bool {
        let site = self.current_mut();
        match site.block_mut(id) {
            Some(block) => {
                f(block);
                site.touch();
                true
            }
            None => false,
        }
    }

    /// Shallow-merge content fields into a block.
    pub fn update_block_content(&mut self, id: &str, patch: ContentMap) -> bool {
        self.update_block(id, |block| block.merge_content(patch))
    }

    /// Shallow-merge style fields into a block.
    pub fn update_block_style(&mut self, id: &str, patch: BlockStyle) -> bool {
        self.update_block(id, |block| block.style.merge(patch))
    }

    pub fn set_block_animation(&mut self, id: &str, animation: Option<Animation>) -> bool {
        self.update_block(id, |block| block.animation = animation)
    }

    pub fn set_block_custom_css(&mut self, id: &str, css: Option<String>) -> bool {
        self.update_block(id, |block| block.custom_css = css)
    }

    pub fn set_block_comment(&mut self, id: &str, comment: Option<String>) -> bool {
        self.update_block(id, |block| block.comment = comment)
    }

    /// Merge a style patch into one breakpoint's responsive override.
    pub fn set_responsive_style(
        &mut self,
        id: &str,
        breakpoint: Breakpoint,
        patch: BlockStyle,
    ) -> bool {
        self.update_block(id, |block| block.responsive.merge(breakpoint, patch))
    }

    pub fn toggle_block_lock(&mut self, id: &str) -> bool {
        self.update_block(id, |block| block.locked = !block.locked)
    }

    pub fn toggle_block_visibility(&mut self, id: &str) -> bool {
        self.update_block(id, |block| block.visibility = block.visibility.toggled())
    }

    /// Remove a block and close the order gap. Missing id is a no-op.
    pub fn delete_block(&mut self, id: &str) -> bool {
        let site = self.current_mut();
        let Some(position) = site.block_position(id) else {
            return false;
        };
        site.blocks.remove(position);
        reindex_blocks(site);
        site.touch();
        true
    }

    /// Clone a block (fresh id, deep-copied content/style) immediately
    /// after the original. Returns the new block, or None if the source
    /// is gone.
    pub fn duplicate_block(&mut self, id: &str) -> Option<Block> {
        let position = self.current().block_position(id)?;
        let new_id = self.ids.new_id();

        let site = self.current_mut();
        let mut copy = site.blocks[position].clone();
        copy.id = new_id;
        site.blocks.insert(position + 1, copy);
        reindex_blocks(site);
        site.touch();
        Some(site.blocks[position + 1].clone())
    }

    /// Remove the block from its position and reinsert at `new_index`
    /// (insert position clamped to the remaining length).
    pub fn move_block(&mut self, id: &str, new_index: usize) -> bool {
        let site = self.current_mut();
        let Some(position) = site.block_position(id) else {
            return false;
        };
        let block = site.blocks.remove(position);
        let at = new_index.min(site.blocks.len());
        site.blocks.insert(at, block);
        reindex_blocks(site);
        site.touch();
        true
    }

    /// Splice-based drag-and-drop reorder: the active block lands at the
    /// target block's position. No-op if either id is missing.
    pub fn reorder_blocks(&mut self, active_id: &str, over_id: &str) -> bool {
        if active_id == over_id {
            return false;
        }
        let site = self.current_mut();
        if site.block_position(over_id).is_none() {
            return false;
        }
        let Some(from) = site.block_position(active_id) else {
            return false;
        };

        let block = site.blocks.remove(from);
        let to = site
            .block_position(over_id)
            .unwrap_or(site.blocks.len());
        site.blocks.insert(to, block);
        reindex_blocks(site);
        site.touch();
        true
    }

    // ---- bulk block mutations ------------------------------------------
    //
    // Bulk variants apply to all listed ids in one document update with a
    // single order re-derivation. Re-deriving once per batch (not once per
    // id) keeps later removals from seeing indices computed against an
    // already-mutated array.

    /// Delete every listed block. Returns the number removed.
    pub fn delete_blocks(&mut self, ids: &[String]) -> usize {
        let site = self.current_mut();
        let before = site.blocks.len();
        site.blocks.retain(|b| !ids.iter().any(|id| *id == b.id));
        let removed = before - site.blocks.len();
        if removed > 0 {
            reindex_blocks(site);
            site.touch();
        }
        removed
    }

    /// Duplicate every listed block, each copy inserted after its source,
    /// in one pass. Returns the new blocks in document order.
    pub fn duplicate_blocks(&mut self, ids: &[String]) -> Vec<Block> {
        let mut pending: Vec<(String, Block)> = self
            .current()
            .blocks
            .iter()
            .filter(|b| ids.iter().any(|id| *id == b.id))
            .map(|b| (b.id.clone(), b.clone()))
            .collect();
        if pending.is_empty() {
            return Vec::new();
        }
        for (_, copy) in &mut pending {
            copy.id = self.ids.new_id();
        }

        let site = self.current_mut();
        let mut created = Vec::with_capacity(pending.len());
        let existing = std::mem::take(&mut site.blocks);
        for block in existing {
            let source_id = block.id.clone();
            site.blocks.push(block);
            if let Some(index) = pending.iter().position(|(sid, _)| *sid == source_id) {
                let (_, copy) = pending.remove(index);
                created.push(copy.clone());
                site.blocks.push(copy);
            }
        }
        reindex_blocks(site);
        site.touch();
        created
    }

    fn set_flag_bulk(&mut self, ids: &[String], f: impl Fn(&mut Block)) -> usize {
        let site = self.current_mut();
        let mut affected = 0;
        for block in site.blocks.iter_mut() {
            if ids.iter().any(|id| *id == block.id) {
                f(block);
                affected += 1;
            }
        }
        if affected > 0 {
            site.touch();
        }
        affected
    }

    pub fn lock_blocks(&mut self, ids: &[String]) -> usize {
        self.set_flag_bulk(ids, |b| b.locked = true)
    }

    pub fn unlock_blocks(&mut self, ids: &[String]) -> usize {
        self.set_flag_bulk(ids, |b| b.locked = false)
    }

    pub fn hide_blocks(&mut self, ids: &[String]) -> usize {
        self.set_flag_bulk(ids, |b| b.visibility = pagecraft_model::Visibility::Hidden)
    }

    pub fn show_blocks(&mut self, ids: &[String]) -> usize {
        self.set_flag_bulk(ids, |b| b.visibility = pagecraft_model::Visibility::Visible)
    }

    // ---- groups ---------------------------------------------------------

    /// Create a group and stamp `group_id` on every listed block that
    /// still exists.
    pub fn create_group(&mut self, name: impl Into<String>, block_ids: &[String]) -> Group {
        let id = self.ids.new_id();
        let site = self.current_mut();
        let group = Group::new(id.clone(), name.into(), site.groups.len());
        site.groups.push(group.clone());
        for block in site.blocks.iter_mut() {
            if block_ids.iter().any(|bid| *bid == block.id) {
                block.group_id = Some(id.clone());
            }
        }
        site.touch();
        group
    }

    /// Remove a group and clear `group_id` on every member, so no block
    /// is left pointing at a group that no longer exists.
    pub fn delete_group(&mut self, id: &str) -> bool {
        let site = self.current_mut();
        let Some(position) = site.groups.iter().position(|g| g.id == id) else {
            return false;
        };
        site.groups.remove(position);
        for block in site.blocks.iter_mut() {
            if block.group_id.as_deref() == Some(id) {
                block.group_id = None;
            }
        }
        reindex_groups(site);
        site.touch();
        true
    }

    pub fn rename_group(&mut self, id: &str, name: impl Into<String>) -> bool {
        let site = self.current_mut();
        match site.group_mut(id) {
            Some(group) => {
                group.name = name.into();
                site.touch();
                true
            }
            None => false,
        }
    }

    pub fn toggle_group_collapse(&mut self, id: &str) -> bool {
        let site = self.current_mut();
        match site.group_mut(id) {
            Some(group) => {
                group.collapsed = !group.collapsed;
                site.touch();
                true
            }
            None => false,
        }
    }

    // ---- persistence ----------------------------------------------------

    pub fn persisted(&self) -> PersistedWebsiteState {
        PersistedWebsiteState {
            websites: self.websites.clone(),
            current_website_id: self.current_id.clone(),
        }
    }

    /// Restore from a persisted snapshot. An empty websites list is
    /// ignored; an unknown current id falls back to the first website.
    pub fn hydrate(&mut self, state: PersistedWebsiteState) {
        if state.websites.is_empty() {
            return;
        }
        self.websites = state.websites;
        self.current_id = if self
            .websites
            .iter()
            .any(|w| w.id == state.current_website_id)
        {
            state.current_website_id
        } else {
            self.websites[0].id.clone()
        };
    }
}

impl Default for WebsiteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::Visibility;

    fn orders(store: &WebsiteStore) -> Vec<usize> {
        store.current().blocks.iter().map(|b| b.order).collect()
    }

    #[test]
    fn test_add_block_uses_registry_defaults() {
        let mut store = WebsiteStore::new();
        let block = store.add_block(BlockKind::Hero, None).unwrap();

        assert_eq!(block.order, 0);
        assert_eq!(block.content["heading"], "Build something great");
        assert_eq!(store.current().blocks.len(), 1);
    }

    #[test]
    fn test_add_block_unregistered_kind_errors() {
        let mut store = WebsiteStore::with_registry(BlockRegistry::empty());
        let result = store.add_block(BlockKind::Hero, None);
        assert!(matches!(result, Err(EditorError::UnknownBlockKind(_))));
        assert!(store.current().blocks.is_empty());
    }

    #[test]
    fn test_add_block_at_index_shifts_later_blocks() {
        let mut store = WebsiteStore::new();
        let first = store.add_block(BlockKind::Hero, None).unwrap();
        let second = store.add_block(BlockKind::Text, Some(0)).unwrap();

        let blocks = &store.current().blocks;
        assert_eq!(blocks[0].id, second.id);
        assert_eq!(blocks[1].id, first.id);
        assert_eq!(orders(&store), vec![0, 1]);
    }

    #[test]
    fn test_delete_block_repacks_order() {
        let mut store = WebsiteStore::new();
        let a = store.add_block(BlockKind::Hero, None).unwrap();
        let _b = store.add_block(BlockKind::Text, None).unwrap();
        let _c = store.add_block(BlockKind::Footer, None).unwrap();

        assert!(store.delete_block(&a.id));
        assert_eq!(orders(&store), vec![0, 1]);
        assert!(!store.delete_block(&a.id), "second delete is a no-op");
    }

    #[test]
    fn test_update_missing_block_leaves_document_unchanged() {
        let mut store = WebsiteStore::new();
        store.add_block(BlockKind::Hero, None).unwrap();
        let before = store.current().clone();

        assert!(!store.update_block_content("nope", ContentMap::new()));
        assert!(!store.move_block("nope", 0));
        assert!(!store.delete_block("nope"));
        assert!(store.duplicate_block("nope").is_none());

        assert_eq!(*store.current(), before);
    }

    #[test]
    fn test_duplicate_block_is_deep_and_adjacent() {
        let mut store = WebsiteStore::new();
        let source = store.add_block(BlockKind::Hero, None).unwrap();
        store.add_block(BlockKind::Footer, None).unwrap();

        let copy = store.duplicate_block(&source.id).unwrap();
        assert_ne!(copy.id, source.id);
        assert_eq!(copy.content, source.content);
        assert_eq!(copy.style, source.style);
        assert_eq!(store.current().blocks[1].id, copy.id);
        assert_eq!(orders(&store), vec![0, 1, 2]);

        // Mutating the copy must not affect the original.
        let mut patch = ContentMap::new();
        patch.insert("heading".to_string(), serde_json::json!("Changed"));
        store.update_block_content(&copy.id, patch);
        assert_eq!(
            store.block(&source.id).unwrap().content["heading"],
            "Build something great"
        );
    }

    #[test]
    fn test_move_block_swaps_two_blocks() {
        let mut store = WebsiteStore::new();
        let a = store.add_block(BlockKind::Hero, None).unwrap();
        let b = store.add_block(BlockKind::Text, None).unwrap();

        assert!(store.move_block(&a.id, 1));
        let blocks = &store.current().blocks;
        assert_eq!(blocks[0].id, b.id);
        assert_eq!(blocks[1].id, a.id);
        assert_eq!(orders(&store), vec![0, 1]);
    }

    #[test]
    fn test_reorder_blocks_dnd_semantics() {
        let mut store = WebsiteStore::new();
        let a = store.add_block(BlockKind::Hero, None).unwrap();
        let _b = store.add_block(BlockKind::Text, None).unwrap();
        let c = store.add_block(BlockKind::Footer, None).unwrap();

        // Drag the footer onto the hero: footer lands at index 0.
        assert!(store.reorder_blocks(&c.id, &a.id));
        let ids: Vec<&str> = store
            .current()
            .blocks
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids[0], c.id);
        assert_eq!(orders(&store), vec![0, 1, 2]);

        assert!(!store.reorder_blocks(&c.id, "missing"));
        assert!(!store.reorder_blocks("missing", &a.id));
    }

    #[test]
    fn test_bulk_delete_single_reindex() {
        let mut store = WebsiteStore::new();
        let a = store.add_block(BlockKind::Hero, None).unwrap();
        let b = store.add_block(BlockKind::Text, None).unwrap();
        let _c = store.add_block(BlockKind::Footer, None).unwrap();
        let d = store.add_block(BlockKind::Cta, None).unwrap();

        let removed = store.delete_blocks(&[a.id, b.id, d.id, "missing".to_string()]);
        assert_eq!(removed, 3);
        assert_eq!(store.current().blocks.len(), 1);
        assert_eq!(orders(&store), vec![0]);
    }

    #[test]
    fn test_bulk_duplicate_inserts_after_each_source() {
        let mut store = WebsiteStore::new();
        let a = store.add_block(BlockKind::Hero, None).unwrap();
        let b = store.add_block(BlockKind::Text, None).unwrap();

        let created = store.duplicate_blocks(&[a.id.clone(), b.id.clone()]);
        assert_eq!(created.len(), 2);

        let ids: Vec<String> = store
            .current()
            .blocks
            .iter()
            .map(|b| b.id.clone())
            .collect();
        assert_eq!(
            ids,
            vec![
                a.id.clone(),
                created[0].id.clone(),
                b.id.clone(),
                created[1].id.clone()
            ]
        );
        assert_eq!(orders(&store), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_visibility_toggle_on_fresh_block() {
        let mut store = WebsiteStore::new();
        let block = store.add_block(BlockKind::Hero, None).unwrap();

        assert!(store.toggle_block_visibility(&block.id));
        assert_eq!(
            store.block(&block.id).unwrap().visibility,
            Visibility::Hidden
        );

        assert!(store.toggle_block_visibility(&block.id));
        assert_eq!(
            store.block(&block.id).unwrap().visibility,
            Visibility::Visible
        );
    }

    #[test]
    fn test_lock_and_hide_bulk() {
        let mut store = WebsiteStore::new();
        let a = store.add_block(BlockKind::Hero, None).unwrap();
        let b = store.add_block(BlockKind::Text, None).unwrap();
        let ids = vec![a.id.clone(), b.id.clone()];

        assert_eq!(store.lock_blocks(&ids), 2);
        assert!(store.block(&a.id).unwrap().locked);
        assert_eq!(store.unlock_blocks(&ids), 2);
        assert!(!store.block(&b.id).unwrap().locked);

        assert_eq!(store.hide_blocks(&ids), 2);
        assert!(!store.block(&a.id).unwrap().is_visible());
        assert_eq!(store.show_blocks(&ids), 2);
        assert!(store.block(&a.id).unwrap().is_visible());
    }

    #[test]
    fn test_group_lifecycle_clears_membership() {
        let mut store = WebsiteStore::new();
        let a = store.add_block(BlockKind::Navbar, None).unwrap();
        let b = store.add_block(BlockKind::Hero, None).unwrap();

        let group = store.create_group("Header Stuff", &[a.id.clone()]);
        assert_eq!(
            store.block(&a.id).unwrap().group_id.as_deref(),
            Some(group.id.as_str())
        );
        assert!(store.block(&b.id).unwrap().group_id.is_none());
        assert_eq!(store.current().blocks_in_group(&group.id).len(), 1);

        assert!(store.delete_group(&group.id));
        assert!(store.block(&a.id).unwrap().group_id.is_none());
        assert!(store.current().group(&group.id).is_none());
        assert!(!store.delete_group(&group.id));
    }

    #[test]
    fn test_rename_and_collapse_group() {
        let mut store = WebsiteStore::new();
        let group = store.create_group("Old", &[]);

        assert!(store.rename_group(&group.id, "New"));
        assert_eq!(store.current().group(&group.id).unwrap().name, "New");

        assert!(store.toggle_group_collapse(&group.id));
        assert!(store.current().group(&group.id).unwrap().collapsed);

        assert!(!store.rename_group("missing", "X"));
    }

    #[test]
    fn test_mutations_stamp_updated_at() {
        let mut store = WebsiteStore::new();
        let created = store.current().updated_at;
        let block = store.add_block(BlockKind::Hero, None).unwrap();
        assert!(store.current().updated_at >= created);

        let after_add = store.current().updated_at;
        store.update_block_style(
            &block.id,
            BlockStyle {
                background: Some("#000".to_string()),
                ..Default::default()
            },
        );
        assert!(store.current().updated_at >= after_add);
    }

    #[test]
    fn test_multi_website_management() {
        let mut store = WebsiteStore::new();
        let first_id = store.current().id.clone();
        store.add_block(BlockKind::Hero, None).unwrap();

        let second = store.create_website("Second Site");
        assert_eq!(store.current().id, second.id);
        assert!(store.current().blocks.is_empty());

        assert!(store.set_current_website(&first_id));
        assert_eq!(store.current().blocks.len(), 1);
        assert!(!store.set_current_website("missing"));
    }

    #[test]
    fn test_hydrate_falls_back_on_unknown_current() {
        let mut store = WebsiteStore::new();
        let site = Website::new("w-restored".to_string(), "Restored");
        store.hydrate(PersistedWebsiteState {
            websites: vec![site],
            current_website_id: "gone".to_string(),
        });
        assert_eq!(store.current().id, "w-restored");

        // An empty persisted list is ignored entirely.
        store.hydrate(PersistedWebsiteState {
            websites: vec![],
            current_website_id: String::new(),
        });
        assert_eq!(store.current().id, "w-restored");
    }
}
