//! Grouped in-memory search.
//!
//! The in-process counterpart of the hosted search endpoint: a
//! case-insensitive title/content match across a mixed collection, with
//! results grouped by kind, newest first, and truncated per group. Access
//! control and pagination over large datasets stay with the backend.

use lorebase_model::{ContentItem, ContentKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-group result cap, matching the hosted endpoint's page size.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Search hits, grouped the way the search dialog renders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub documents: Vec<ContentItem>,
    pub threads: Vec<ContentItem>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.threads.is_empty()
    }

    pub fn total(&self) -> usize {
        self.documents.len() + self.threads.len()
    }
}

/// Search `items` for `query`, grouping hits by kind.
///
/// Each group is ordered by `created_at` descending and capped at `limit`.
/// An empty query yields empty groups; the caller gates on non-empty input.
pub fn search_content(items: &[ContentItem], query: &str, limit: usize) -> SearchResults {
    if query.is_empty() {
        return SearchResults::default();
    }

    let needle = query.to_lowercase();
    let mut hits: Vec<&ContentItem> = items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.content.to_lowercase().contains(&needle)
        })
        .collect();

    hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut results = SearchResults::default();
    for item in hits {
        let group = match item.kind {
            ContentKind::Document => &mut results.documents,
            ContentKind::Thread => &mut results.threads,
        };
        if group.len() < limit {
            group.push(item.clone());
        }
    }

    debug!(query = %query, hits = results.total(), "search complete");
    results
}
