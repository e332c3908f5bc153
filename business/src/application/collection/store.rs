use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::{RwLock, watch};

use crate::application::collection::sample_data;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{FoodItem, NewFoodItemProps};
use crate::domain::food_item::repository::FoodCollectionRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::dates;

const DEFAULT_SAMPLE_COUNT: usize = 15;

/// Owns the authoritative in-memory collection of food items.
///
/// Every mutation is applied to the in-memory collection first and is
/// all-or-nothing there; afterwards the whole collection is written out
/// best-effort. Write failures are logged and never reach the caller.
/// Collaborators only ever receive cloned snapshots.
pub struct FoodCollectionStore {
    repository: Arc<dyn FoodCollectionRepository>,
    logger: Arc<dyn Logger>,
    items: RwLock<Vec<FoodItem>>,
    loading: AtomicBool,
    revision: watch::Sender<u64>,
    sample_count: usize,
}

impl FoodCollectionStore {
    pub fn new(repository: Arc<dyn FoodCollectionRepository>, logger: Arc<dyn Logger>) -> Self {
        Self::with_sample_count(repository, logger, DEFAULT_SAMPLE_COUNT)
    }

    pub fn with_sample_count(
        repository: Arc<dyn FoodCollectionRepository>,
        logger: Arc<dyn Logger>,
        sample_count: usize,
    ) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            repository,
            logger,
            items: RwLock::new(Vec::new()),
            loading: AtomicBool::new(true),
            revision,
            sample_count,
        }
    }

    /// Reads the persisted collection on first use.
    ///
    /// An empty store or a failed read seeds the collection with sample data
    /// and persists the seed best-effort; read failures are logged, never
    /// surfaced. Subsequent calls return the in-memory snapshot.
    pub async fn load(&self) -> Vec<FoodItem> {
        if !self.loading.load(Ordering::Acquire) {
            return self.snapshot().await;
        }

        let (loaded, seeded) = match self.repository.load().await {
            Ok(Some(items)) => {
                self.logger
                    .info(&format!("Loaded {} food items from storage", items.len()));
                (items, false)
            }
            Ok(None) => {
                self.logger.info("No stored collection, seeding sample data");
                (sample_data::generate(self.sample_count, dates::today()), true)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to load stored collection: {}", e));
                (sample_data::generate(self.sample_count, dates::today()), true)
            }
        };

        *self.items.write().await = loaded.clone();
        self.loading.store(false, Ordering::Release);
        if seeded {
            self.persist(&loaded).await;
        }
        self.revision.send_modify(|r| *r += 1);
        loaded
    }

    /// True until the first `load` resolves.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Cloned copy of the current collection; mutating it has no effect on
    /// the store.
    pub async fn snapshot(&self) -> Vec<FoodItem> {
        self.items.read().await.clone()
    }

    /// Subscribes to collection changes; the receiver ticks on every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Validates and appends a new item, assigning a collection-unique id
    /// when the caller supplied none, and returns the stored record.
    pub async fn add(&self, props: NewFoodItemProps) -> Result<FoodItem, FoodItemError> {
        self.logger.info(&format!("Adding food item: {}", props.name));

        let stored = {
            let mut items = self.items.write().await;
            let mut props = props;
            if props.id.as_deref().is_none_or(|id| id.trim().is_empty()) {
                props.id = Some(next_id(&items));
            }
            let item = FoodItem::new(props)?;
            items.push(item.clone());
            item
        };

        self.committed().await;
        self.logger
            .info(&format!("Food item added with id: {}", stored.id));
        Ok(stored)
    }

    /// Replaces the record whose id matches `item.id`.
    ///
    /// An unknown id leaves the collection unchanged and reports `NotFound`;
    /// no record is ever created here.
    pub async fn update(&self, item: FoodItem) -> Result<FoodItem, FoodItemError> {
        self.logger.info(&format!("Updating food item: {}", item.id));

        {
            let mut items = self.items.write().await;
            let slot = items
                .iter_mut()
                .find(|existing| existing.id == item.id)
                .ok_or(FoodItemError::NotFound)?;
            *slot = item.clone();
        }

        self.committed().await;
        Ok(item)
    }

    /// Removes the record with the given id, or reports `NotFound`.
    pub async fn delete(&self, id: &str) -> Result<(), FoodItemError> {
        self.logger.info(&format!("Deleting food item: {}", id));

        {
            let mut items = self.items.write().await;
            let index = items
                .iter()
                .position(|item| item.id == id)
                .ok_or(FoodItemError::NotFound)?;
            items.remove(index);
        }

        self.committed().await;
        Ok(())
    }

    /// Marks the item as consumed.
    ///
    /// Consumed items leave the inventory: the record is removed from the
    /// collection and the persisted snapshot, and returned to the caller.
    pub async fn consume(&self, id: &str) -> Result<FoodItem, FoodItemError> {
        self.logger.info(&format!("Consuming food item: {}", id));

        let item = {
            let mut items = self.items.write().await;
            let index = items
                .iter()
                .position(|item| item.id == id)
                .ok_or(FoodItemError::NotFound)?;
            items.remove(index)
        };

        self.committed().await;
        Ok(item)
    }

    async fn committed(&self) {
        let snapshot = self.snapshot().await;
        self.revision.send_modify(|r| *r += 1);
        self.persist(&snapshot).await;
    }

    async fn persist(&self, items: &[FoodItem]) {
        if let Err(e) = self.repository.save(items).await {
            self.logger
                .error(&format!("Failed to persist collection: {}", e));
        }
    }
}

/// Millisecond-timestamp id, bumped until it is unique in the collection.
fn next_id(items: &[FoodItem]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while items.iter().any(|item| item.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
