use chrono::NaiveDate;

use super::value_objects::FoodCategory;
use crate::domain::shared::dates;

/// Default shelf life in days for a category, used to pre-fill expiry dates
/// on the add and edit forms.
pub fn default_shelf_life_days(category: FoodCategory) -> u32 {
    match category {
        FoodCategory::Meat => 3,
        FoodCategory::Vegetable => 7,
        FoodCategory::Fruit => 10,
        FoodCategory::Dairy => 5,
        _ => 14,
    }
}

/// Expiry date suggested for a purchase made on `purchase_date`.
///
/// Always computed from the current purchase date, so switching categories
/// on a form replaces the previous suggestion instead of stacking on it.
pub fn suggested_expiry_date(category: FoodCategory, purchase_date: NaiveDate) -> NaiveDate {
    dates::add_days(purchase_date, i64::from(default_shelf_life_days(category)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn should_use_dedicated_shelf_life_per_category() {
        assert_eq!(default_shelf_life_days(FoodCategory::Meat), 3);
        assert_eq!(default_shelf_life_days(FoodCategory::Vegetable), 7);
        assert_eq!(default_shelf_life_days(FoodCategory::Fruit), 10);
        assert_eq!(default_shelf_life_days(FoodCategory::Dairy), 5);
    }

    #[test]
    fn should_use_fourteen_days_for_remaining_categories() {
        assert_eq!(default_shelf_life_days(FoodCategory::Seafood), 14);
        assert_eq!(default_shelf_life_days(FoodCategory::PreparedFood), 14);
        assert_eq!(default_shelf_life_days(FoodCategory::Other), 14);
    }

    #[test]
    fn should_suggest_expiry_from_purchase_date() {
        assert_eq!(
            suggested_expiry_date(FoodCategory::Meat, date("2025-01-01")),
            date("2025-01-04")
        );
    }

    #[test]
    fn should_recompute_from_purchase_date_when_category_changes() {
        let purchase = date("2025-01-01");
        // Fruit first, then Meat: the second suggestion replaces the first
        // instead of adding to it.
        assert_eq!(suggested_expiry_date(FoodCategory::Fruit, purchase), date("2025-01-11"));
        assert_eq!(suggested_expiry_date(FoodCategory::Meat, purchase), date("2025-01-04"));
    }
}
