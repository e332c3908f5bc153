use chrono::{NaiveDate, Utc};

use super::errors::FoodItemError;
use super::value_objects::{FoodCategory, StorageLocation};

/// A perishable item tracked in the household inventory.
///
/// The id is unique within the collection and immutable once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub location: StorageLocation,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub image: Option<String>,
    pub notes: Option<String>,
}

pub struct NewFoodItemProps {
    pub id: Option<String>,
    pub name: String,
    pub category: FoodCategory,
    pub location: StorageLocation,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub image: Option<String>,
    pub notes: Option<String>,
}

impl FoodItem {
    pub fn new(props: NewFoodItemProps) -> Result<Self, FoodItemError> {
        if props.name.trim().is_empty() {
            return Err(FoodItemError::NameEmpty);
        }

        let id = match props.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Utc::now().timestamp_millis().to_string(),
        };

        Ok(Self {
            id,
            name: props.name,
            category: props.category,
            location: props.location,
            purchase_date: props.purchase_date,
            expiry_date: props.expiry_date,
            image: props.image,
            notes: props.notes,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: String,
        name: String,
        category: FoodCategory,
        location: StorageLocation,
        purchase_date: NaiveDate,
        expiry_date: NaiveDate,
        image: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            location,
            purchase_date,
            expiry_date,
            image,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn props(name: &str, id: Option<&str>) -> NewFoodItemProps {
        NewFoodItemProps {
            id: id.map(str::to_string),
            name: name.to_string(),
            category: FoodCategory::Dairy,
            location: StorageLocation::Refrigerated,
            purchase_date: date("2025-01-01"),
            expiry_date: date("2025-01-06"),
            image: None,
            notes: None,
        }
    }

    #[test]
    fn should_create_item_when_valid_name() {
        let item = FoodItem::new(props("Milk", Some("42"))).unwrap();
        assert_eq!(item.id, "42");
        assert_eq!(item.name, "Milk");
        assert_eq!(item.category, FoodCategory::Dairy);
    }

    #[test]
    fn should_reject_item_when_name_is_empty() {
        let result = FoodItem::new(props("", None));
        assert!(matches!(result.unwrap_err(), FoodItemError::NameEmpty));
    }

    #[test]
    fn should_reject_item_when_name_is_whitespace() {
        let result = FoodItem::new(props("   ", None));
        assert!(matches!(result.unwrap_err(), FoodItemError::NameEmpty));
    }

    #[test]
    fn should_generate_id_when_none_supplied() {
        let item = FoodItem::new(props("Milk", None)).unwrap();
        assert!(!item.id.is_empty());
        assert!(item.id.parse::<i64>().is_ok());
    }

    #[test]
    fn should_generate_id_when_supplied_id_is_blank() {
        let item = FoodItem::new(props("Milk", Some(" "))).unwrap();
        assert!(!item.id.trim().is_empty());
        assert_ne!(item.id, " ");
    }

    #[test]
    fn should_permit_expiry_before_purchase() {
        let mut p = props("Leftovers", Some("1"));
        p.expiry_date = date("2024-12-30");
        let item = FoodItem::new(p).unwrap();
        assert!(item.expiry_date < item.purchase_date);
    }
}
