use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Meat,
    Vegetable,
    Fruit,
    Dairy,
    Seafood,
    PreparedFood,
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 7] = [
        FoodCategory::Meat,
        FoodCategory::Vegetable,
        FoodCategory::Fruit,
        FoodCategory::Dairy,
        FoodCategory::Seafood,
        FoodCategory::PreparedFood,
        FoodCategory::Other,
    ];

    /// Fixed chart and badge color for the category.
    /// Categories without a dedicated hue share the neutral gray.
    pub fn color(&self) -> &'static str {
        match self {
            FoodCategory::Meat => "#f44336",
            FoodCategory::Vegetable => "#4caf50",
            FoodCategory::Fruit => "#ffca28",
            FoodCategory::Dairy => "#42a5f5",
            FoodCategory::Seafood => "#26c6da",
            FoodCategory::PreparedFood => "#ec407a",
            FoodCategory::Other => "#9e9e9e",
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodCategory::Meat => write!(f, "meat"),
            FoodCategory::Vegetable => write!(f, "vegetable"),
            FoodCategory::Fruit => write!(f, "fruit"),
            FoodCategory::Dairy => write!(f, "dairy"),
            FoodCategory::Seafood => write!(f, "seafood"),
            FoodCategory::PreparedFood => write!(f, "prepared_food"),
            FoodCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meat" => Ok(FoodCategory::Meat),
            "vegetable" => Ok(FoodCategory::Vegetable),
            "fruit" => Ok(FoodCategory::Fruit),
            "dairy" => Ok(FoodCategory::Dairy),
            "seafood" => Ok(FoodCategory::Seafood),
            "prepared_food" => Ok(FoodCategory::PreparedFood),
            "other" => Ok(FoodCategory::Other),
            _ => Err(format!("Invalid food category: {}", s)),
        }
    }
}

/// Reference to a vector icon in the UI icon sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRef {
    pub name: &'static str,
    pub family: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageLocation {
    Refrigerated,
    Frozen,
    RoomTemperature,
}

impl StorageLocation {
    pub const ALL: [StorageLocation; 3] = [
        StorageLocation::Refrigerated,
        StorageLocation::Frozen,
        StorageLocation::RoomTemperature,
    ];

    /// Icon shown next to the storage location.
    /// Locations without a dedicated glyph fall back to the archive box.
    pub fn icon(&self) -> IconRef {
        match self {
            StorageLocation::Refrigerated => IconRef {
                name: "snowflake-o",
                family: "FontAwesome",
            },
            StorageLocation::Frozen => IconRef {
                name: "snowflake",
                family: "FontAwesome5",
            },
            StorageLocation::RoomTemperature => IconRef {
                name: "archive",
                family: "FontAwesome5",
            },
        }
    }
}

impl std::fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageLocation::Refrigerated => write!(f, "refrigerated"),
            StorageLocation::Frozen => write!(f, "frozen"),
            StorageLocation::RoomTemperature => write!(f, "room_temperature"),
        }
    }
}

impl std::str::FromStr for StorageLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "refrigerated" => Ok(StorageLocation::Refrigerated),
            "frozen" => Ok(StorageLocation::Frozen),
            "room_temperature" => Ok(StorageLocation::RoomTemperature),
            _ => Err(format!("Invalid storage location: {}", s)),
        }
    }
}
