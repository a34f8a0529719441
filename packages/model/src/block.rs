//! # Block
//!
//! One visual unit of a page. A block is a tagged bag of content fields
//! plus optional presentation overlays (style, animation, raw CSS,
//! responsive overrides). The field shape of `content` depends on the
//! block kind, so it is kept as a JSON map rather than a uniform struct.

use crate::registry::BlockKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content fields for a block, keyed by field name.
pub type ContentMap = Map<String, Value>;

/// Render visibility of a block.
///
/// Hidden blocks stay in the document (and the layers panel) but are
/// skipped by live preview and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Horizontal alignment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Padding size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeBucket {
    None,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// Content width bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthBucket {
    Narrow,
    Normal,
    Wide,
    Full,
}

/// Border radius bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    None,
    Small,
    Medium,
    Large,
    Full,
}

/// Box shadow bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    None,
    Small,
    Medium,
    Large,
}

/// Presentation properties of a block. All fields optional; render-time
/// defaults apply where absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStyle {
    pub background: Option<String>,
    pub text_color: Option<String>,
    pub padding: Option<SizeBucket>,
    pub align: Option<Alignment>,
    pub width: Option<WidthBucket>,
    pub border_radius: Option<Radius>,
    pub shadow: Option<Shadow>,
}

impl BlockStyle {
    /// Shallow-merge `patch` into `self`: fields present in the patch
    /// overwrite, absent fields are left untouched.
    pub fn merge(&mut self, patch: BlockStyle) {
        if patch.background.is_some() {
            self.background = patch.background;
        }
        if patch.text_color.is_some() {
            self.text_color = patch.text_color;
        }
        if patch.padding.is_some() {
            self.padding = patch.padding;
        }
        if patch.align.is_some() {
            self.align = patch.align;
        }
        if patch.width.is_some() {
            self.width = patch.width;
        }
        if patch.border_radius.is_some() {
            self.border_radius = patch.border_radius;
        }
        if patch.shadow.is_some() {
            self.shadow = patch.shadow;
        }
    }
}

/// Entrance animation effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationEffect {
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    ZoomIn,
}

/// Per-block animation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub effect: AnimationEffect,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// Responsive breakpoint selector for style overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
}

/// Per-breakpoint style overrides, layered over the base style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponsiveStyles {
    pub mobile: Option<BlockStyle>,
    pub tablet: Option<BlockStyle>,
}

impl ResponsiveStyles {
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&BlockStyle> {
        match breakpoint {
            Breakpoint::Mobile => self.mobile.as_ref(),
            Breakpoint::Tablet => self.tablet.as_ref(),
        }
    }

    /// Merge a patch into the override for one breakpoint, creating it if
    /// absent.
    pub fn merge(&mut self, breakpoint: Breakpoint, patch: BlockStyle) {
        let slot = match breakpoint {
            Breakpoint::Mobile => &mut self.mobile,
            Breakpoint::Tablet => &mut self.tablet,
        };
        slot.get_or_insert_with(BlockStyle::default).merge(patch);
    }
}

/// One visual unit of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier, immutable for the block's lifetime.
    pub id: String,
    pub kind: BlockKind,
    #[serde(default)]
    pub content: ContentMap,
    #[serde(default)]
    pub style: BlockStyle,
    /// Zero-based position; the document keeps these contiguous.
    pub order: usize,
    /// Locked blocks have edit/move/delete affordances suppressed in the
    /// editor. The document mutations themselves do not enforce this.
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub visibility: Visibility,
    /// Back-reference to a group; a block belongs to at most one.
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub animation: Option<Animation>,
    #[serde(default)]
    pub custom_css: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub responsive: ResponsiveStyles,
}

impl Block {
    /// Create a block at `order` with the given defaults.
    pub fn new(id: String, kind: BlockKind, content: ContentMap, style: BlockStyle) -> Self {
        Self {
            id,
            kind,
            content,
            style,
            order: 0,
            locked: false,
            visibility: Visibility::Visible,
            group_id: None,
            animation: None,
            custom_css: None,
            comment: None,
            responsive: ResponsiveStyles::default(),
        }
    }

    /// Shallow-merge content fields: keys present in the patch overwrite.
    pub fn merge_content(&mut self, patch: ContentMap) {
        for (key, value) in patch {
            self.content.insert(key, value);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }
}
