#[derive(Debug, thiserror::Error)]
pub enum FoodItemError {
    #[error("food_item.name_empty")]
    NameEmpty,
    #[error("food_item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
