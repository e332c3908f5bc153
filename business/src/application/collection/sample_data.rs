use chrono::NaiveDate;
use rand::Rng;

use crate::domain::food_item::model::FoodItem;
use crate::domain::food_item::value_objects::{FoodCategory, StorageLocation};
use crate::domain::shared::dates;

const NAMES: [&str; 18] = [
    "Apple",
    "Banana",
    "Chicken Breast",
    "Beef",
    "Milk",
    "Yogurt",
    "Eggs",
    "Carrot",
    "Tomato",
    "Cabbage",
    "Salmon",
    "Shrimp",
    "Steak",
    "Cheese",
    "Ham",
    "Bread",
    "Tofu",
    "Spinach",
];

const LOCATIONS: [StorageLocation; 2] = [StorageLocation::Refrigerated, StorageLocation::Frozen];

/// Generates placeholder inventory for first launches and demos.
///
/// Name, category and location are drawn independently from fixed pools,
/// purchases fall within the past 30 days and expiry dates 1-20 days ahead.
pub fn generate(count: usize, today: NaiveDate) -> Vec<FoodItem> {
    let mut rng = rand::rng();

    (0..count)
        .map(|i| {
            FoodItem::from_repository(
                i.to_string(),
                NAMES[rng.random_range(0..NAMES.len())].to_string(),
                FoodCategory::ALL[rng.random_range(0..FoodCategory::ALL.len())],
                LOCATIONS[rng.random_range(0..LOCATIONS.len())],
                dates::add_days(today, -rng.random_range(0..30i64)),
                dates::add_days(today, rng.random_range(1..=20i64)),
                None,
                None,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn should_generate_requested_number_of_items() {
        let today = date("2025-04-10");
        assert_eq!(generate(15, today).len(), 15);
        assert!(generate(0, today).is_empty());
    }

    #[test]
    fn should_assign_unique_ids() {
        let items = generate(25, date("2025-04-10"));
        let ids: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn should_keep_dates_inside_the_generation_windows() {
        let today = date("2025-04-10");
        for item in generate(50, today) {
            let purchase_age = dates::days_between(item.purchase_date, today);
            let expiry_lead = dates::days_remaining(item.expiry_date, today);
            assert!((0..30).contains(&purchase_age), "purchase {} days back", purchase_age);
            assert!((1..=20).contains(&expiry_lead), "expiry {} days ahead", expiry_lead);
        }
    }

    #[test]
    fn should_only_use_cold_storage_locations() {
        for item in generate(50, date("2025-04-10")) {
            assert!(LOCATIONS.contains(&item.location));
            assert!(item.image.is_none());
            assert!(item.notes.is_none());
        }
    }
}
