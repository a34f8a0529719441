//! # Block Type Registry
//!
//! Maps each block kind to its editor metadata and the default content
//! and style a freshly added block starts from. The store's `add_block`
//! consults this table; an unregistered kind is the one checked error in
//! the mutation API (a panel offering a kind with no definition is a
//! programming error, not a data race).

use crate::block::{Alignment, BlockStyle, ContentMap, SizeBucket, WidthBucket};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// The closed set of block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Hero,
    Navbar,
    Text,
    Image,
    Gallery,
    Features,
    Pricing,
    Testimonials,
    Cta,
    Form,
    Video,
    Spacer,
    Footer,
}

impl BlockKind {
    /// All registered kinds, in palette display order.
    pub const ALL: [BlockKind; 13] = [
        BlockKind::Navbar,
        BlockKind::Hero,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Gallery,
        BlockKind::Video,
        BlockKind::Features,
        BlockKind::Pricing,
        BlockKind::Testimonials,
        BlockKind::Cta,
        BlockKind::Form,
        BlockKind::Spacer,
        BlockKind::Footer,
    ];
}

/// Palette category a kind is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCategory {
    Layout,
    Content,
    Media,
    Marketing,
}

/// Editor metadata and creation defaults for one block kind.
#[derive(Debug, Clone)]
pub struct BlockDefinition {
    pub label: &'static str,
    pub category: BlockCategory,
    pub default_content: ContentMap,
    pub default_style: BlockStyle,
}

/// Kind → definition table.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    definitions: HashMap<BlockKind, BlockDefinition>,
}

impl BlockRegistry {
    /// An empty registry. Useful in tests exercising the unregistered-kind
    /// error path.
    pub fn empty() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    pub fn register(&mut self, kind: BlockKind, definition: BlockDefinition) {
        self.definitions.insert(kind, definition);
    }

    pub fn definition(&self, kind: BlockKind) -> Option<&BlockDefinition> {
        self.definitions.get(&kind)
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        self.definitions.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Kinds in a category, in palette order.
    pub fn kinds_in_category(&self, category: BlockCategory) -> Vec<BlockKind> {
        BlockKind::ALL
            .into_iter()
            .filter(|kind| {
                self.definitions
                    .get(kind)
                    .is_some_and(|d| d.category == category)
            })
            .collect()
    }
}

fn content(fields: &[(&str, Value)]) -> ContentMap {
    let mut map = ContentMap::new();
    for (key, value) in fields {
        map.insert((*key).to_string(), value.clone());
    }
    map
}

impl Default for BlockRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        registry.register(
            BlockKind::Navbar,
            BlockDefinition {
                label: "Navigation Bar",
                category: BlockCategory::Layout,
                default_content: content(&[
                    ("brand", json!("Your Brand")),
                    ("links", json!(["Home", "About", "Services", "Contact"])),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Small),
                    width: Some(WidthBucket::Full),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Hero,
            BlockDefinition {
                label: "Hero Section",
                category: BlockCategory::Layout,
                default_content: content(&[
                    ("heading", json!("Build something great")),
                    ("subheading", json!("Launch your next idea in minutes.")),
                    ("button_text", json!("Get Started")),
                    ("button_link", json!("#")),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::ExtraLarge),
                    align: Some(Alignment::Center),
                    width: Some(WidthBucket::Wide),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Text,
            BlockDefinition {
                label: "Text",
                category: BlockCategory::Content,
                default_content: content(&[(
                    "body",
                    json!("Write something compelling here."),
                )]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Medium),
                    width: Some(WidthBucket::Normal),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Image,
            BlockDefinition {
                label: "Image",
                category: BlockCategory::Media,
                default_content: content(&[
                    ("src", json!("https://placehold.co/1200x600")),
                    ("alt", json!("Placeholder image")),
                    ("caption", json!("")),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Medium),
                    width: Some(WidthBucket::Normal),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Gallery,
            BlockDefinition {
                label: "Gallery",
                category: BlockCategory::Media,
                default_content: content(&[
                    ("columns", json!(3)),
                    (
                        "images",
                        json!([
                            { "src": "https://placehold.co/600x400", "alt": "" },
                            { "src": "https://placehold.co/600x400", "alt": "" },
                            { "src": "https://placehold.co/600x400", "alt": "" }
                        ]),
                    ),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Large),
                    width: Some(WidthBucket::Wide),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Video,
            BlockDefinition {
                label: "Video",
                category: BlockCategory::Media,
                default_content: content(&[
                    ("url", json!("")),
                    ("autoplay", json!(false)),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Medium),
                    width: Some(WidthBucket::Normal),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Features,
            BlockDefinition {
                label: "Features Grid",
                category: BlockCategory::Marketing,
                default_content: content(&[
                    ("heading", json!("Why choose us")),
                    (
                        "items",
                        json!([
                            { "title": "Fast", "description": "Pages load instantly." },
                            { "title": "Flexible", "description": "Compose any layout." },
                            { "title": "Friendly", "description": "No code required." }
                        ]),
                    ),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Large),
                    align: Some(Alignment::Center),
                    width: Some(WidthBucket::Wide),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Pricing,
            BlockDefinition {
                label: "Pricing Table",
                category: BlockCategory::Marketing,
                default_content: content(&[
                    ("heading", json!("Pricing")),
                    (
                        "plans",
                        json!([
                            { "name": "Starter", "price": "$9", "features": ["1 site", "Community support"] },
                            { "name": "Pro", "price": "$29", "features": ["10 sites", "Priority support"] },
                            { "name": "Team", "price": "$79", "features": ["Unlimited sites", "Dedicated support"] }
                        ]),
                    ),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Large),
                    align: Some(Alignment::Center),
                    width: Some(WidthBucket::Wide),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Testimonials,
            BlockDefinition {
                label: "Testimonials",
                category: BlockCategory::Marketing,
                default_content: content(&[(
                    "quotes",
                    json!([
                        { "text": "This tool changed how we ship pages.", "author": "Alex P." },
                        { "text": "From idea to live site in an afternoon.", "author": "Sam K." }
                    ]),
                )]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Large),
                    align: Some(Alignment::Center),
                    width: Some(WidthBucket::Normal),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Cta,
            BlockDefinition {
                label: "Call to Action",
                category: BlockCategory::Marketing,
                default_content: content(&[
                    ("heading", json!("Ready to start?")),
                    ("button_text", json!("Sign Up Free")),
                    ("button_link", json!("#")),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Large),
                    align: Some(Alignment::Center),
                    width: Some(WidthBucket::Normal),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Form,
            BlockDefinition {
                label: "Contact Form",
                category: BlockCategory::Marketing,
                default_content: content(&[
                    ("heading", json!("Get in touch")),
                    ("fields", json!(["name", "email", "message"])),
                    ("submit_text", json!("Send")),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Large),
                    width: Some(WidthBucket::Narrow),
                    ..Default::default()
                },
            },
        );

        registry.register(
            BlockKind::Spacer,
            BlockDefinition {
                label: "Spacer",
                category: BlockCategory::Layout,
                default_content: content(&[("height", json!(64))]),
                default_style: BlockStyle::default(),
            },
        );

        registry.register(
            BlockKind::Footer,
            BlockDefinition {
                label: "Footer",
                category: BlockCategory::Layout,
                default_content: content(&[
                    ("text", json!("© 2025 Your Brand. All rights reserved.")),
                    ("links", json!(["Privacy", "Terms"])),
                ]),
                default_style: BlockStyle {
                    padding: Some(SizeBucket::Medium),
                    align: Some(Alignment::Center),
                    width: Some(WidthBucket::Full),
                    ..Default::default()
                },
            },
        );

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_all_kinds() {
        let registry = BlockRegistry::default();
        for kind in BlockKind::ALL {
            assert!(registry.contains(kind), "missing definition for {kind:?}");
        }
        assert_eq!(registry.len(), BlockKind::ALL.len());
    }

    #[test]
    fn test_hero_defaults() {
        let registry = BlockRegistry::default();
        let hero = registry.definition(BlockKind::Hero).unwrap();

        assert_eq!(hero.label, "Hero Section");
        assert_eq!(hero.category, BlockCategory::Layout);
        assert!(hero.default_content.contains_key("heading"));
        assert_eq!(hero.default_style.align, Some(Alignment::Center));
    }

    #[test]
    fn test_empty_registry_misses() {
        let registry = BlockRegistry::empty();
        assert!(registry.definition(BlockKind::Hero).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_kinds_in_category() {
        let registry = BlockRegistry::default();
        let media = registry.kinds_in_category(BlockCategory::Media);
        assert_eq!(
            media,
            vec![BlockKind::Image, BlockKind::Gallery, BlockKind::Video]
        );
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BlockKind::Testimonials).unwrap(),
            "\"testimonials\""
        );
    }
}
