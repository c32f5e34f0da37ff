use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::favorites::application::domain::{Favorite, FavoriteChanges, NewFavorite};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FavoriteRepositoryError {
    #[error("Favorite not found")]
    NotFound,

    #[error("Vendor already in favorites")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes are scoped to the owning user; another user's favorite reads as missing.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn create(&self, favorite: NewFavorite) -> Result<Favorite, FavoriteRepositoryError>;

    async fn update(
        &self,
        user_id: Uuid,
        favorite_id: Uuid,
        changes: FavoriteChanges,
    ) -> Result<Favorite, FavoriteRepositoryError>;

    async fn delete(&self, user_id: Uuid, favorite_id: Uuid)
        -> Result<(), FavoriteRepositoryError>;

    async fn delete_by_vendor(
        &self,
        user_id: Uuid,
        vendor_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError>;
}
