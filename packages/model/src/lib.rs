//! # Lorebase Model
//!
//! Shared data types for the Lorebase workspace:
//!
//! - [`Block`] / [`BlockContent`]: the block-document body, a closed tagged
//!   union with one variant per block type
//! - [`ContentItem`]: read-only projection of a persisted document or thread,
//!   consumed by the query crate
//! - [`IdGenerator`]: document-scoped sequential block ids
//! - [`slugify`]: title → URL slug normalization
//!
//! This crate owns no behavior beyond construction and (de)serialization.
//! Editing lives in `lorebase-editor`, filtering in `lorebase-query`.

mod blocks;
mod content;
mod error;
mod id_generator;
mod slug;

pub use blocks::{Block, BlockContent, BlockKind, ChecklistItem};
pub use content::{ContentItem, ContentKind};
pub use error::ModelError;
pub use id_generator::IdGenerator;
pub use slug::slugify;
