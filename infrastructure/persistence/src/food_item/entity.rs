use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use business::domain::food_item::model::FoodItem;
use business::domain::food_item::value_objects::{FoodCategory, StorageLocation};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire record for one food item inside the persisted collection blob.
///
/// Field names are part of the stored format and must stay camelCase.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemEntity {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub purchase_date: String,
    pub expiry_date: String,
    pub image: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FoodItemEntity {
    pub fn from_domain(item: &FoodItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.to_string(),
            location: item.location.to_string(),
            purchase_date: item.purchase_date.format(DATE_FORMAT).to_string(),
            expiry_date: item.expiry_date.format(DATE_FORMAT).to_string(),
            image: item.image.clone(),
            notes: item.notes.clone(),
        }
    }

    /// Rehydrates the domain record.
    ///
    /// Unknown category or location tokens normalize to their fallback
    /// variants; an invalid date fails the record.
    pub fn into_domain(self) -> Result<FoodItem, chrono::ParseError> {
        let purchase_date = NaiveDate::parse_from_str(&self.purchase_date, DATE_FORMAT)?;
        let expiry_date = NaiveDate::parse_from_str(&self.expiry_date, DATE_FORMAT)?;

        Ok(FoodItem::from_repository(
            self.id,
            self.name,
            self.category
                .parse::<FoodCategory>()
                .unwrap_or(FoodCategory::Other),
            self.location
                .parse::<StorageLocation>()
                .unwrap_or(StorageLocation::Refrigerated),
            purchase_date,
            expiry_date,
            self.image,
            self.notes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(category: &str, location: &str, expiry: &str) -> FoodItemEntity {
        FoodItemEntity {
            id: "1".to_string(),
            name: "Milk".to_string(),
            category: category.to_string(),
            location: location.to_string(),
            purchase_date: "2025-01-01".to_string(),
            expiry_date: expiry.to_string(),
            image: None,
            notes: None,
        }
    }

    #[test]
    fn should_round_trip_domain_record() {
        let item = FoodItem::from_repository(
            "7".to_string(),
            "Salmon".to_string(),
            FoodCategory::Seafood,
            StorageLocation::Frozen,
            "2025-01-01".parse().unwrap(),
            "2025-01-15".parse().unwrap(),
            Some("file:///salmon.jpg".to_string()),
            Some("half portion left".to_string()),
        );

        let restored = FoodItemEntity::from_domain(&item).into_domain().unwrap();

        assert_eq!(restored, item);
    }

    #[test]
    fn should_serialize_with_camel_case_field_names() {
        let entity = FoodItemEntity::from_domain(&FoodItem::from_repository(
            "1".to_string(),
            "Milk".to_string(),
            FoodCategory::Dairy,
            StorageLocation::Refrigerated,
            "2025-01-01".parse().unwrap(),
            "2025-01-06".parse().unwrap(),
            None,
            None,
        ));

        let json = serde_json::to_string(&entity).unwrap();

        assert!(json.contains("\"purchaseDate\":\"2025-01-01\""));
        assert!(json.contains("\"expiryDate\":\"2025-01-06\""));
        assert!(json.contains("\"image\":null"));
    }

    #[test]
    fn should_normalize_unknown_category_to_other() {
        let item = entity("mystery_goo", "frozen", "2025-01-06").into_domain().unwrap();
        assert_eq!(item.category, FoodCategory::Other);
        assert_eq!(item.location, StorageLocation::Frozen);
    }

    #[test]
    fn should_normalize_unknown_location_to_refrigerated() {
        let item = entity("dairy", "cellar", "2025-01-06").into_domain().unwrap();
        assert_eq!(item.location, StorageLocation::Refrigerated);
    }

    #[test]
    fn should_fail_record_on_invalid_date() {
        assert!(entity("dairy", "frozen", "not-a-date").into_domain().is_err());
    }
}
