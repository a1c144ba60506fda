use std::cmp::Reverse;
use crate::models::{BrowseQuery, Category, NeighborhoodRecord, SortBy};

/// Filter and order neighborhoods for the browse view
///
/// No scoring and no cap: every record matching the search term is
/// returned.
pub fn browse<'a>(neighborhoods: &'a [NeighborhoodRecord], query: &BrowseQuery) -> Vec<&'a NeighborhoodRecord> {
    let term = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let mut results: Vec<&NeighborhoodRecord> = neighborhoods
        .iter()
        .filter(|record| term.as_deref().map_or(true, |t| matches_search(record, t)))
        .collect();

    sort_neighborhoods(&mut results, query.sort_by);
    results
}

/// Case-insensitive substring match over name, description and key features
///
/// `term` must already be lowercase.
#[inline]
pub fn matches_search(record: &NeighborhoodRecord, term: &str) -> bool {
    record.name.to_lowercase().contains(term)
        || record.description.to_lowercase().contains(term)
        || record
            .key_features
            .iter()
            .any(|f| f.to_lowercase().contains(term))
}

pub fn sort_neighborhoods(records: &mut [&NeighborhoodRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => records.sort_by_key(|r| r.name.to_lowercase()),
        SortBy::Walkability => records.sort_by_key(|r| Reverse(r.scores[Category::Walkability])),
        SortBy::Safety => records.sort_by_key(|r| Reverse(r.scores[Category::Safety])),
        SortBy::Affordability => records.sort_by_key(|r| Reverse(r.scores[Category::Affordability])),
        SortBy::Rent => records.sort_by_key(|r| r.housing.average_rent),
    }
}
