use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::FoodItem;

/// Port for durable storage of the whole collection.
///
/// The persisted copy is a best-effort snapshot written wholesale on every
/// mutation; the in-memory collection owned by the store stays the source of
/// truth.
#[async_trait]
pub trait FoodCollectionRepository: Send + Sync {
    /// Reads the persisted collection. `Ok(None)` means nothing was stored yet.
    async fn load(&self) -> Result<Option<Vec<FoodItem>>, RepositoryError>;
    /// Replaces the persisted collection with `items`.
    async fn save(&self, items: &[FoodItem]) -> Result<(), RepositoryError>;
}
