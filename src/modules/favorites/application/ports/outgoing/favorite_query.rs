use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::favorites::application::domain::Favorite;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FavoriteQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FavoriteQuery: Send + Sync {
    /// Newest first, each with its vendor summary.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        category: Option<&str>,
    ) -> Result<Vec<Favorite>, FavoriteQueryError>;

    async fn find_for_user(
        &self,
        user_id: Uuid,
        favorite_id: Uuid,
    ) -> Result<Option<Favorite>, FavoriteQueryError>;

    async fn is_favorited(&self, user_id: Uuid, vendor_id: Uuid)
        -> Result<bool, FavoriteQueryError>;
}
