use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::food_item::model::FoodItem;
use business::domain::food_item::repository::FoodCollectionRepository;

use super::entity::FoodItemEntity;
use crate::kv::FileKeyValueStore;

const COLLECTION_KEY: &str = "foods";

/// Key-value adapter persisting the whole collection as one JSON array under
/// a single fixed key.
pub struct FoodCollectionKv {
    store: FileKeyValueStore,
    key: String,
}

impl FoodCollectionKv {
    pub fn new(store: FileKeyValueStore) -> Self {
        Self::with_key(store, COLLECTION_KEY)
    }

    pub fn with_key(store: FileKeyValueStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl FoodCollectionRepository for FoodCollectionKv {
    async fn load(&self) -> Result<Option<Vec<FoodItem>>, RepositoryError> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(_) => return Err(RepositoryError::Persistence),
        };

        let entities: Vec<FoodItemEntity> =
            serde_json::from_str(&raw).map_err(|_| RepositoryError::Malformed)?;

        let items = entities
            .into_iter()
            .map(|entity| entity.into_domain().map_err(|_| RepositoryError::Malformed))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(items))
    }

    async fn save(&self, items: &[FoodItem]) -> Result<(), RepositoryError> {
        let entities: Vec<FoodItemEntity> = items.iter().map(FoodItemEntity::from_domain).collect();

        let payload =
            serde_json::to_string(&entities).map_err(|_| RepositoryError::Persistence)?;

        self.store
            .set(&self.key, &payload)
            .await
            .map_err(|_| RepositoryError::Persistence)
    }
}
