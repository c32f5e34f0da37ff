use async_trait::async_trait;
use uuid::Uuid;

use super::FavoriteError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::favorites::application::domain::{Favorite, FavoriteChanges};

#[async_trait]
pub trait UpdateFavoriteUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        favorite_id: Uuid,
        changes: FavoriteChanges,
    ) -> Result<Favorite, FavoriteError>;
}

#[async_trait]
pub trait RemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, favorite_id: Uuid) -> Result<(), FavoriteError>;
}

/// Removes the caller's favorite for a vendor, by vendor id.
#[async_trait]
pub trait RemoveVendorFavoriteUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, vendor_id: Uuid) -> Result<(), FavoriteError>;
}
