use async_trait::async_trait;
use tracing::info;

use super::repository_error;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::favorites::application::domain::{Favorite, FavoriteRequest, NewFavorite};
use crate::modules::favorites::application::ports::incoming::use_cases::{
    AddFavoriteUseCase, FavoriteError,
};
use crate::modules::favorites::application::ports::outgoing::FavoriteRepository;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

pub struct AddFavoriteService<L, R>
where
    L: VendorLookup,
    R: FavoriteRepository,
{
    lookup: L,
    repository: R,
}

impl<L, R> AddFavoriteService<L, R>
where
    L: VendorLookup,
    R: FavoriteRepository,
{
    pub fn new(lookup: L, repository: R) -> Self {
        Self { lookup, repository }
    }
}

#[async_trait]
impl<L, R> AddFavoriteUseCase for AddFavoriteService<L, R>
where
    L: VendorLookup + Send + Sync,
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, req: FavoriteRequest) -> Result<Favorite, FavoriteError> {
        let user_id = actor.user_id.value();
        let new_favorite =
            NewFavorite::from_request(user_id, req).map_err(FavoriteError::Validation)?;

        self.lookup
            .find_active(new_favorite.vendor_id)
            .await
            .map_err(|e| FavoriteError::Repository(e.to_string()))?
            .ok_or(FavoriteError::VendorNotFound)?;

        let favorite = self
            .repository
            .create(new_favorite)
            .await
            .map_err(repository_error)?;

        info!(favorite_id = %favorite.id, vendor_id = %favorite.vendor_id, "Vendor added to favorites");
        Ok(favorite)
    }
}
