//! Tag frequency aggregation.
//!
//! Feeds the filter UI's available-tag list: every distinct tag across a
//! collection with its occurrence count, most used first.

use lorebase_model::ContentItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One distinct tag and how many items carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// Count tag occurrences across `items`, sorted by count descending with
/// tag name ascending as tiebreak. Untagged items contribute nothing.
pub fn tag_counts(items: &[ContentItem]) -> Vec<TagCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for item in items {
        for tag in &item.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut result: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();

    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    result
}
