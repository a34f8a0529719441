//! # Editor UI State
//!
//! Transient, non-document state: selection, preview mode, device and
//! zoom, sidebar tab, notifications. None of this participates in
//! history — it is view state, not document state. Only a small subset
//! (onboarding flag, recent block kinds, custom breakpoints) is
//! persisted.

use chrono::{DateTime, Duration, Utc};
use pagecraft_model::{BlockKind, IdGenerator};
use serde::{Deserialize, Serialize};

/// Preview device frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// Active sidebar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarTab {
    #[default]
    Blocks,
    Layers,
    Settings,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// Transient toast. Expired by `expire_notifications`, never persisted.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

/// How long a toast stays on screen.
pub const NOTIFICATION_TTL_MS: i64 = 4000;

/// User-defined responsive breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBreakpoint {
    pub name: String,
    pub max_width: u32,
}

const ZOOM_MIN: u16 = 25;
const ZOOM_MAX: u16 = 200;
const RECENT_KINDS_CAP: usize = 6;

/// The subset of editor state that survives a restart. Selection, zoom
/// and notifications are deliberately excluded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedEditorState {
    #[serde(default)]
    pub onboarding_done: bool,
    #[serde(default)]
    pub recent_block_kinds: Vec<BlockKind>,
    #[serde(default)]
    pub custom_breakpoints: Vec<CustomBreakpoint>,
}

#[derive(Debug)]
pub struct EditorState {
    selected_block_id: Option<String>,
    selected_block_ids: Vec<String>,
    pub preview_mode: bool,
    pub device: Device,
    zoom: u16,
    pub sidebar_tab: SidebarTab,
    notifications: Vec<Notification>,
    notification_ids: IdGenerator,
    pub onboarding_done: bool,
    recent_block_kinds: Vec<BlockKind>,
    pub custom_breakpoints: Vec<CustomBreakpoint>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            selected_block_id: None,
            selected_block_ids: Vec::new(),
            preview_mode: false,
            device: Device::default(),
            zoom: 100,
            sidebar_tab: SidebarTab::default(),
            notifications: Vec::new(),
            notification_ids: IdGenerator::new("notifications"),
            onboarding_done: false,
            recent_block_kinds: Vec::new(),
            custom_breakpoints: Vec::new(),
        }
    }

    // ---- selection ------------------------------------------------------

    /// Single-select: resets multi-select to exactly this block (or
    /// clears everything on None).
    pub fn select_block(&mut self, id: Option<String>) {
        match id {
            Some(id) => {
                self.selected_block_ids = vec![id.clone()];
                self.selected_block_id = Some(id);
            }
            None => self.clear_selection(),
        }
    }

    /// Multi-select toggle. `selected_block_id` tracks the most recently
    /// toggled-in id, falling back to the newest remaining member, and
    /// nulls out once the set empties.
    pub fn toggle_block_selection(&mut self, id: &str) {
        if let Some(position) = self.selected_block_ids.iter().position(|s| s == id) {
            self.selected_block_ids.remove(position);
            if self.selected_block_id.as_deref() == Some(id) {
                self.selected_block_id = self.selected_block_ids.last().cloned();
            }
        } else {
            self.selected_block_ids.push(id.to_string());
            self.selected_block_id = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_block_id = None;
        self.selected_block_ids.clear();
    }

    pub fn selected_block_id(&self) -> Option<&str> {
        self.selected_block_id.as_deref()
    }

    pub fn selected_block_ids(&self) -> &[String] {
        &self.selected_block_ids
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_block_ids.iter().any(|s| s == id)
    }

    /// Drop selected ids that no longer resolve (after delete/undo).
    pub fn retain_selection(&mut self, keep: impl Fn(&str) -> bool) {
        self.selected_block_ids.retain(|id| keep(id));
        if let Some(id) = &self.selected_block_id {
            if !keep(id) {
                self.selected_block_id = self.selected_block_ids.last().cloned();
            }
        }
    }

    // ---- view controls --------------------------------------------------

    pub fn set_zoom(&mut self, zoom: u16) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    pub fn toggle_preview(&mut self) {
        self.preview_mode = !self.preview_mode;
    }

    // ---- notifications --------------------------------------------------

    /// Fire-and-forget toast. Returns its id for explicit dismissal.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> String {
        let id = self.notification_ids.new_id();
        self.notifications.push(Notification {
            id: id.clone(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
        });
        id
    }

    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Prune toasts older than the TTL.
    pub fn expire_notifications(&mut self, now: DateTime<Utc>) {
        self.notifications
            .retain(|n| now - n.created_at < Duration::milliseconds(NOTIFICATION_TTL_MS));
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    // ---- recents --------------------------------------------------------

    /// Track a kind in the most-recently-used palette row.
    pub fn record_recent_kind(&mut self, kind: BlockKind) {
        self.recent_block_kinds.retain(|k| *k != kind);
        self.recent_block_kinds.insert(0, kind);
        self.recent_block_kinds.truncate(RECENT_KINDS_CAP);
    }

    pub fn recent_block_kinds(&self) -> &[BlockKind] {
        &self.recent_block_kinds
    }

    // ---- persistence ----------------------------------------------------

    pub fn persisted(&self) -> PersistedEditorState {
        PersistedEditorState {
            onboarding_done: self.onboarding_done,
            recent_block_kinds: self.recent_block_kinds.clone(),
            custom_breakpoints: self.custom_breakpoints.clone(),
        }
    }

    pub fn hydrate(&mut self, state: PersistedEditorState) {
        self.onboarding_done = state.onboarding_done;
        self.recent_block_kinds = state.recent_block_kinds;
        self.custom_breakpoints = state.custom_breakpoints;
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
