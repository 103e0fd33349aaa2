//! Read-only projections of persisted content.
//!
//! The backend owns documents and forum threads; what the query crate sees
//! is this flattened view of the fields that filtering and sorting read.
//! Nothing in this workspace mutates a [`ContentItem`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an item is a document or a forum thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Document,
    Thread,
}

/// A persisted document or thread, as loaded by the backend query layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    /// Plain-text body (for documents, the flattened block text).
    pub content: String,
    /// Empty means untagged.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Author display name.
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Thread-only counters; absent on documents.
    #[serde(default)]
    pub reply_count: Option<u64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub view_count: Option<u64>,
}
