//! The filter/sort pipeline.
//!
//! Predicates are applied in a fixed order, each narrowing the previous
//! result; an item must pass every active predicate to survive. Sorting is
//! stable and happens last. The source slice is never mutated; callers get
//! references into it.

use chrono::{DateTime, Duration, Months, NaiveTime, Utc};
use lorebase_model::ContentItem;
use std::cmp::Ordering;
use tracing::debug;

use crate::filters::{DateRange, FilterSpec, SortKey};

/// Derive a filtered, ordered view of `items`.
///
/// `now` is the reference time the date-range cutoffs are computed from;
/// callers pass `Utc::now()` in production and a pinned value in tests.
pub fn filter_content<'a>(
    items: &'a [ContentItem],
    spec: &FilterSpec,
    now: DateTime<Utc>,
) -> Vec<&'a ContentItem> {
    let cutoff = date_cutoff(spec.date_range, now);
    let search = spec.search.to_lowercase();

    let mut view: Vec<&ContentItem> = items
        .iter()
        .filter(|item| matches_search(item, &search))
        .filter(|item| matches_tags(item, &spec.tags))
        .filter(|item| matches_exact(item.category.as_deref(), spec.category.as_deref()))
        .filter(|item| matches_exact(Some(item.author.as_str()), spec.author.as_deref()))
        .filter(|item| cutoff.map_or(true, |c| item.created_at >= c))
        .collect();

    sort_view(&mut view, spec.sort_by);

    debug!(
        total = items.len(),
        kept = view.len(),
        sort = ?spec.sort_by,
        "filtered content view"
    );

    view
}

/// Case-insensitive substring match against title or body. `search` is
/// already lowercased by the caller; empty means inactive.
fn matches_search(item: &ContentItem, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(search) || item.content.to_lowercase().contains(search)
}

/// Item must be tagged at all, and share at least one requested tag.
fn matches_tags(item: &ContentItem, requested: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }
    !item.tags.is_empty() && requested.iter().any(|tag| item.tags.contains(tag))
}

/// Exact-match predicate for category/author; `None` wanted means inactive.
fn matches_exact(actual: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual == Some(w),
    }
}

/// Earliest `created_at` that survives the range, or `None` when inactive.
///
/// Month-based ranges use calendar subtraction with end-of-month clamping
/// (March 31 minus one month is the last day of February).
fn date_cutoff(range: DateRange, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match range {
        DateRange::All => None,
        DateRange::Today => Some(now.date_naive().and_time(NaiveTime::MIN).and_utc()),
        DateRange::Week => Some(now - Duration::days(7)),
        DateRange::Month => now.checked_sub_months(Months::new(1)),
        DateRange::Quarter => now.checked_sub_months(Months::new(3)),
        DateRange::Year => now.checked_sub_months(Months::new(12)),
    }
}

fn sort_view(view: &mut [&ContentItem], key: SortKey) {
    match key {
        SortKey::Recent => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Title => view.sort_by(|a, b| title_cmp(a, b)),
        SortKey::TitleDesc => view.sort_by(|a, b| title_cmp(b, a)),
        SortKey::Replies => view.sort_by(|a, b| {
            b.reply_count
                .unwrap_or(0)
                .cmp(&a.reply_count.unwrap_or(0))
        }),
        SortKey::Votes => {
            view.sort_by(|a, b| b.vote_count.unwrap_or(0).cmp(&a.vote_count.unwrap_or(0)))
        }
    }
}

/// Case-insensitive title ordering, with the raw title as tiebreak so the
/// order is total.
fn title_cmp(a: &ContentItem, b: &ContentItem) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}
