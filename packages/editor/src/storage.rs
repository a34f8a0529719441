//! # Local Persistence
//!
//! JSON state files under fixed keys, mirroring the client's local
//! storage layout: one `<key>.json` per store. Load failures are never
//! fatal — a missing file is simply absent state, and corrupted JSON is
//! logged and discarded so startup falls back to defaults instead of
//! crashing.

use crate::errors::EditorError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key for the document store's persisted state.
pub const WEBSITE_STORAGE_KEY: &str = "website-storage";
/// Key for the editor UI store's persisted subset.
pub const EDITOR_STORAGE_KEY: &str = "editor-storage";

#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), EditorError> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    /// Load persisted state. `None` when the key has never been saved or
    /// the stored JSON cannot be used.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read persisted state");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding corrupted persisted state");
                None
            }
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), EditorError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PersistedEditorState;
    use pagecraft_model::BlockKind;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());

        let state = PersistedEditorState {
            onboarding_done: true,
            recent_block_kinds: vec![BlockKind::Hero, BlockKind::Text],
            custom_breakpoints: Vec::new(),
        };
        storage.save(EDITOR_STORAGE_KEY, &state).unwrap();

        let loaded: PersistedEditorState = storage.load(EDITOR_STORAGE_KEY).unwrap();
        assert!(loaded.onboarding_done);
        assert_eq!(
            loaded.recent_block_kinds,
            vec![BlockKind::Hero, BlockKind::Text]
        );
    }

    #[test]
    fn test_load_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());
        let loaded: Option<PersistedEditorState> = storage.load("never-saved");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupted_json_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());

        std::fs::write(dir.path().join("editor-storage.json"), "{not json").unwrap();
        let loaded: Option<PersistedEditorState> = storage.load(EDITOR_STORAGE_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());

        storage
            .save(EDITOR_STORAGE_KEY, &PersistedEditorState::default())
            .unwrap();
        storage.remove(EDITOR_STORAGE_KEY).unwrap();
        storage.remove(EDITOR_STORAGE_KEY).unwrap();
        let loaded: Option<PersistedEditorState> = storage.load(EDITOR_STORAGE_KEY);
        assert!(loaded.is_none());
    }
}
