//! Named, collapsible bucket of blocks for the layers panel.
//!
//! Membership is stored on the block (`Block::group_id`), not here: the
//! group is a label, and the member set is derived by filtering blocks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub collapsed: bool,
    pub order: usize,
}

impl Group {
    pub fn new(id: String, name: String, order: usize) -> Self {
        Self {
            id,
            name,
            collapsed: false,
            order,
        }
    }
}
