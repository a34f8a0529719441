//! # Website
//!
//! The aggregate root: an ordered collection of blocks, the groups that
//! organize them, and site-wide settings. `updated_at` is refreshed by
//! the editing store on every mutation that touches blocks, groups or
//! settings.

use crate::block::Block;
use crate::group::Group;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Theme colors applied site-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub background: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_string(),
            secondary_color: "#7c3aed".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

/// Search-engine metadata emitted into the exported `<head>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeoSettings {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub theme: ThemeSettings,
    pub font_family: String,
    #[serde(default)]
    pub seo: SeoSettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            font_family: "Inter".to_string(),
            seo: SeoSettings::default(),
        }
    }
}

/// Derive a URL slug from a display name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub settings: SiteSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Website {
    pub fn new(id: String, name: impl Into<String>) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            id,
            slug: slugify(&name),
            name,
            blocks: Vec::new(),
            groups: Vec::new(),
            settings: SiteSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the update timestamp. Called by the store after every
    /// mutation that changes blocks, groups or settings.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn block_position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Blocks sorted by their order index.
    pub fn ordered_blocks(&self) -> Vec<&Block> {
        let mut blocks: Vec<&Block> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.order);
        blocks
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Member blocks of a group, derived by filtering.
    pub fn blocks_in_group(&self, group_id: &str) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|b| b.group_id.as_deref() == Some(group_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Portfolio Site"), "my-portfolio-site");
        assert_eq!(slugify("  Spaces  &  Symbols! "), "spaces-symbols");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_new_website_has_matching_timestamps() {
        let site = Website::new("w-1".to_string(), "Test");
        assert_eq!(site.created_at, site.updated_at);
        assert_eq!(site.slug, "test");
        assert!(site.blocks.is_empty());
    }
}
