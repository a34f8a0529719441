//! End-to-end editor session tests: clipboard, grouping, bulk actions,
//! persistence.

use pagecraft_editor::{EditorSession, Storage};
use pagecraft_model::{BlockKind, Visibility};

#[test]
fn test_copy_paste_through_session() {
    let mut session = EditorSession::new();
    let hero = session.add_block(BlockKind::Hero, None).unwrap();

    assert!(session.copy_selected());
    assert!(session.clipboard.has_clipboard());

    let pasted = session.paste().unwrap();
    assert_ne!(pasted.id, hero.id);
    assert_eq!(pasted.content, hero.content);
    assert_eq!(session.store.current().blocks.len(), 2);
    // Paste selected the new block.
    assert_eq!(session.state.selected_block_id(), Some(pasted.id.as_str()));

    // Pasting is undoable; the copy disappears, the source stays.
    assert!(session.undo());
    assert_eq!(session.store.current().blocks.len(), 1);
    assert!(session.store.block(&hero.id).is_some());
    // The clipboard itself is not part of history.
    assert!(session.clipboard.has_clipboard());
}

#[test]
fn test_clipboard_survives_source_deletion() {
    let mut session = EditorSession::new();
    let hero = session.add_block(BlockKind::Hero, None).unwrap();

    session.copy_selected();
    session.delete_block(&hero.id);
    assert!(session.store.current().blocks.is_empty());

    let pasted = session.paste().unwrap();
    assert_eq!(pasted.content, hero.content);
    assert_eq!(session.store.current().blocks.len(), 1);
}

#[test]
fn test_group_selection_and_delete_group() {
    let mut session = EditorSession::new();
    let navbar = session.add_block(BlockKind::Navbar, None).unwrap();
    let hero = session.add_block(BlockKind::Hero, None).unwrap();

    session.state.select_block(Some(navbar.id.clone()));
    session.state.toggle_block_selection(&hero.id);

    let group = session.group_selection("Header Stuff").unwrap();
    assert_eq!(session.store.current().blocks_in_group(&group.id).len(), 2);

    assert!(session.delete_group(&group.id));
    assert!(session
        .store
        .current()
        .blocks
        .iter()
        .all(|b| b.group_id.is_none()));

    // Undo restores the group and its membership.
    assert!(session.undo());
    assert_eq!(session.store.current().blocks_in_group(&group.id).len(), 2);
}

#[test]
fn test_bulk_actions_are_single_undo_steps() {
    let mut session = EditorSession::new();
    let a = session.add_block(BlockKind::Hero, None).unwrap();
    let b = session.add_block(BlockKind::Text, None).unwrap();
    let c = session.add_block(BlockKind::Footer, None).unwrap();

    session.state.select_block(Some(a.id.clone()));
    session.state.toggle_block_selection(&b.id);
    session.state.toggle_block_selection(&c.id);

    assert_eq!(session.hide_selected(), 3);
    assert!(session
        .store
        .current()
        .blocks
        .iter()
        .all(|blk| blk.visibility == Visibility::Hidden));

    assert_eq!(session.delete_selected(), 3);
    assert!(session.store.current().blocks.is_empty());
    assert!(session.state.selected_block_ids().is_empty());

    // One undo per bulk action.
    assert!(session.undo());
    assert_eq!(session.store.current().blocks.len(), 3);
    assert!(session.undo());
    assert!(session
        .store
        .current()
        .blocks
        .iter()
        .all(|blk| blk.visibility == Visibility::Visible));
}

#[test]
fn test_stale_selection_bulk_actions_are_noops() {
    let mut session = EditorSession::new();
    let a = session.add_block(BlockKind::Hero, None).unwrap();
    session.state.select_block(Some(a.id.clone()));
    session.store.delete_block(&a.id);

    let levels = session.history.undo_levels();
    assert_eq!(session.delete_selected(), 0);
    assert_eq!(session.lock_selected(), 0);
    assert!(session.group_selection("Empty").is_none());
    // No history entries were burned on no-ops.
    assert_eq!(session.history.undo_levels(), levels);
}

#[test]
fn test_save_and_load_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = Storage::new(dir.path());

    let mut session = EditorSession::new();
    session.add_block(BlockKind::Hero, None)?;
    session.add_block(BlockKind::Footer, None)?;
    session.state.onboarding_done = true;
    let site_id = session.store.current().id.clone();

    session.save(&storage)?;

    let mut restored = EditorSession::new();
    restored.load(&storage);

    assert_eq!(restored.store.current().id, site_id);
    assert_eq!(restored.store.current().blocks.len(), 2);
    assert!(restored.state.onboarding_done);
    // Recent kinds made it through the persisted subset.
    assert_eq!(
        restored.state.recent_block_kinds(),
        [BlockKind::Footer, BlockKind::Hero]
    );
    // History does not survive a restore.
    assert!(!restored.history.can_undo());
    Ok(())
}

#[test]
fn test_load_from_empty_storage_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(dir.path());

    let mut session = EditorSession::new();
    session.load(&storage);

    assert_eq!(session.store.current().name, "Untitled Site");
    assert!(session.store.current().blocks.is_empty());
}

#[test]
fn test_unknown_kind_burns_no_history() {
    let mut session = EditorSession::new();
    session.add_block(BlockKind::Hero, None).unwrap();
    let levels = session.history.undo_levels();

    // An empty-registry store is the realistic failure path, but the
    // session guard is what keeps history clean; exercise it directly.
    let mut bare = EditorSession::new();
    bare.store = pagecraft_editor::WebsiteStore::with_registry(
        pagecraft_editor::BlockRegistry::empty(),
    );
    assert!(bare.add_block(BlockKind::Hero, None).is_err());
    assert!(!bare.history.can_undo());

    assert_eq!(session.history.undo_levels(), levels);
}
