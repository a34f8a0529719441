//! Error types for the editor

use pagecraft_model::BlockKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// The one programming error in the mutation API: a panel offered a
    /// block kind that has no registered definition.
    #[error("no block definition registered for kind {0:?}")]
    UnknownBlockKind(BlockKind),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
