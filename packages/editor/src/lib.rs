//! # Pagecraft Editor
//!
//! Editing engine for the Pagecraft website builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Block / Group / Website + registry   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: stores + undo/redo                  │
//! │  - WebsiteStore: document mutations         │
//! │  - HistoryStore: snapshot undo/redo         │
//! │  - ClipboardStore: copy/paste               │
//! │  - EditorState: selection, view, toasts     │
//! │  - EditCoalescer: debounced content edits   │
//! │  - Storage: local JSON persistence          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compilers: Website → HTML / React exports   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the source of truth**: view state (selection,
//!    zoom, toasts) points into it but never participates in history.
//! 2. **Snapshot, then mutate**: history records the document as it
//!    exists immediately before each action.
//! 3. **Misses are benign**: a by-id operation racing a deletion is a
//!    no-op, never a crash. The one typed error is adding a block of an
//!    unregistered kind.
//! 4. **Explicit instances**: every store is a plain constructible
//!    struct; tests build isolated sessions.
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::EditorSession;
//! use pagecraft_model::BlockKind;
//!
//! let mut session = EditorSession::new();
//! let hero = session.add_block(BlockKind::Hero, None).unwrap();
//! session.delete_block(&hero.id);
//! session.undo();
//! assert!(session.store.block(&hero.id).is_some());
//! ```

mod clipboard;
mod coalesce;
mod errors;
mod history;
mod session;
mod state;
mod storage;
mod store;

pub use clipboard::ClipboardStore;
pub use coalesce::{EditCoalescer, DEFAULT_COALESCE_WINDOW};
pub use errors::EditorError;
pub use history::{HistoryEntry, HistoryStore, MAX_HISTORY_DEPTH};
pub use session::EditorSession;
pub use state::{
    CustomBreakpoint, Device, EditorState, Notification, NotificationKind, PersistedEditorState,
    SidebarTab, NOTIFICATION_TTL_MS,
};
pub use storage::{Storage, EDITOR_STORAGE_KEY, WEBSITE_STORAGE_KEY};
pub use store::{PersistedWebsiteState, WebsiteStore};

// Re-export the model types consumers need alongside the stores.
pub use pagecraft_model::{
    Block, BlockKind, BlockRegistry, BlockStyle, ContentMap, Group, Visibility, Website,
};
