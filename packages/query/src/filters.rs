//! Filter criteria as assembled by the filter UI.
//!
//! The wire shape mirrors what the UI sends: lowercase strings, `"all"` as
//! the inactive sentinel for category/author/date range, and a sort key
//! where anything unrecognized means "most recent" (sort is a display
//! preference, never an error).

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// User-selected filter and sort criteria for one filtering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Free-text search; empty means inactive.
    pub search: String,

    /// Requested tags (OR semantics); empty means inactive.
    pub tags: Vec<String>,

    /// Exact category name; `None` means all categories.
    #[serde(deserialize_with = "all_as_none")]
    pub category: Option<String>,

    /// Exact author display name; `None` means all authors.
    #[serde(deserialize_with = "all_as_none")]
    pub author: Option<String>,

    pub date_range: DateRange,

    pub sort_by: SortKey,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            tags: Vec::new(),
            category: None,
            author: None,
            date_range: DateRange::All,
            sort_by: SortKey::Recent,
        }
    }
}

impl FilterSpec {
    /// True when any narrowing predicate is active (sort alone does not
    /// count).
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.tags.is_empty()
            || self.category.is_some()
            || self.author.is_some()
            || self.date_range != DateRange::All
    }
}

/// Accept the UI's `"all"` sentinel (or an explicit null) as `None`.
fn all_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| v != "all"))
}

/// How far back `created_at` may reach, relative to the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    All,
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// `created_at` descending. Default, and the fallback for anything
    /// unrecognized.
    Recent,
    /// `created_at` ascending.
    Oldest,
    /// Title ascending, case-insensitive.
    Title,
    /// Title descending, case-insensitive.
    #[serde(rename = "title-desc")]
    TitleDesc,
    /// `reply_count` descending (threads; missing counts as 0).
    Replies,
    /// `vote_count` descending (threads; missing counts as 0).
    Votes,
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    /// Total: unknown keys fall back to [`SortKey::Recent`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "oldest" => SortKey::Oldest,
            "title" => SortKey::Title,
            "title-desc" => SortKey::TitleDesc,
            "replies" => SortKey::Replies,
            "votes" => SortKey::Votes,
            _ => SortKey::Recent,
        })
    }
}
