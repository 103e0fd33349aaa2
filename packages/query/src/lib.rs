//! # Lorebase Query
//!
//! Pure, in-memory derivation of content views:
//!
//! - [`filter_content`]: predicate chain + stable sort over a collection,
//!   driven by a [`FilterSpec`] and an explicit reference time
//! - [`tag_counts`]: tag frequency aggregation feeding the filter UI
//! - [`search_content`]: grouped title/content search across a mixed
//!   collection
//!
//! Everything here reads a `&[ContentItem]` loaded by the backend query
//! layer and hands a derived view back to the caller; the source collection
//! is never mutated and no I/O happens. Search-at-scale, pagination, and
//! access control stay with the backend.

mod filters;
mod pipeline;
mod search;
mod tags;

pub use filters::{DateRange, FilterSpec, SortKey};
pub use pipeline::filter_content;
pub use search::{search_content, SearchResults, DEFAULT_SEARCH_LIMIT};
pub use tags::{tag_counts, TagCount};

// Re-export the item types the API speaks in
pub use lorebase_model::{ContentItem, ContentKind};
