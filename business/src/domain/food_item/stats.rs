use std::collections::HashMap;

use chrono::NaiveDate;

use super::freshness::{self, ExpiryTier};
use super::model::FoodItem;
use super::value_objects::FoodCategory;

/// Item counts per category. Only categories present in the collection get
/// an entry.
pub fn by_category(items: &[FoodItem]) -> HashMap<FoodCategory, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.category).or_insert(0) += 1;
    }
    counts
}

/// Item counts per expiry tier as of `today`.
///
/// Every tier is present, zeroes included, so chart consumers always get
/// four slices.
pub fn by_expiry_tier(items: &[FoodItem], today: NaiveDate) -> HashMap<ExpiryTier, usize> {
    let mut counts: HashMap<ExpiryTier, usize> =
        ExpiryTier::ALL.iter().map(|tier| (*tier, 0)).collect();
    for item in items {
        *counts.entry(freshness::item_tier(item, today)).or_insert(0) += 1;
    }
    counts
}
