use chrono::NaiveDate;

use super::freshness;
use super::model::FoodItem;
use super::value_objects::StorageLocation;

/// Active list filter selected in the UI. Session-scoped, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterTag {
    All,
    ExpiringSoon,
    Location(StorageLocation),
}

/// Filters and sorts the collection into the list rendered by the browsing
/// screens.
///
/// Search matches the item name or category token as a case-insensitive
/// substring. `ExpiringSoon` keeps items due within 0-7 days, expired items
/// excluded. The result is a fresh copy sorted ascending by expiry date with
/// insertion order breaking ties; the input collection is never touched, and
/// identical inputs always produce the identical sequence.
pub fn query(
    items: &[FoodItem],
    search_text: &str,
    filter: &FilterTag,
    today: NaiveDate,
) -> Vec<FoodItem> {
    let needle = search_text.trim().to_lowercase();

    let mut result: Vec<FoodItem> = items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.category.to_string().contains(&needle)
        })
        .filter(|item| match filter {
            FilterTag::All => true,
            FilterTag::ExpiringSoon => freshness::is_expiring_soon(item, today),
            FilterTag::Location(location) => item.location == *location,
        })
        .cloned()
        .collect();

    // Vec::sort_by_key is stable, which keeps ties in insertion order.
    result.sort_by_key(|item| item.expiry_date);
    result
}
