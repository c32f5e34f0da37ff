use async_trait::async_trait;
use uuid::Uuid;

use super::FavoriteError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::favorites::application::domain::{Favorite, FavoriteStatus};

#[async_trait]
pub trait ListFavoritesUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        category: Option<String>,
    ) -> Result<Vec<Favorite>, FavoriteError>;
}

#[async_trait]
pub trait CheckFavoriteUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, vendor_id: Uuid)
        -> Result<FavoriteStatus, FavoriteError>;
}
