//! Client-side derivations over a fetched base set
//!
//! Both functions are pure: they borrow the base set and return a new,
//! ordered selection. They are recomputed on every render instead of being
//! cached in model state.

use std::cmp::Ordering;

use super::character::Character;
use super::types::{FilterState, GalleryFilters, SortKey, SortOrder};

/// Case-insensitive substring filter on name, then sort by the chosen key
pub fn derive_list_view(base: &[Character], filters: &FilterState) -> Vec<Character> {
    let query = filters.query.to_lowercase();

    let mut result: Vec<Character> = base
        .iter()
        .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
        .cloned()
        .collect();

    result.sort_by(|a, b| compare(a, b, filters.sort_by, filters.sort_order));
    result
}

/// Ties compare equal in both directions, so the stable sort keeps base order for them.
/// Unparseable timestamps order before every valid one.
pub fn compare(a: &Character, b: &Character, key: SortKey, order: SortOrder) -> Ordering {
    let ordering = match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Modified => a.modified_millis().cmp(&b.modified_millis()),
    };
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

pub fn apply_gallery_filters(base: &[Character], filters: &GalleryFilters) -> Vec<Character> {
    base.iter()
        .filter(|c| !filters.has_comics || c.comics.available > 0)
        .filter(|c| !filters.has_series || c.series.available > 0)
        .filter(|c| !filters.has_events || c.events.available > 0)
        .cloned()
        .collect()
}
