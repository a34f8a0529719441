//! # Pagecraft Model
//!
//! Core data types for the Pagecraft website builder: the block document
//! (`Website`, `Block`, `Group`), the block type registry that supplies
//! per-kind defaults, and the identifier generator.
//!
//! The editing stores live in `pagecraft-editor`; the export compilers in
//! `pagecraft-compiler-html` / `pagecraft-compiler-react`. This crate is
//! pure data — no mutation policy, no I/O.

pub mod block;
pub mod group;
pub mod id_generator;
pub mod registry;
pub mod website;

pub use block::{
    Alignment, Animation, AnimationEffect, Block, BlockStyle, Breakpoint, ContentMap, Radius,
    ResponsiveStyles, Shadow, SizeBucket, Visibility, WidthBucket,
};
pub use group::Group;
pub use id_generator::IdGenerator;
pub use registry::{BlockCategory, BlockDefinition, BlockKind, BlockRegistry};
pub use website::{slugify, SeoSettings, SiteSettings, ThemeSettings, Website};
