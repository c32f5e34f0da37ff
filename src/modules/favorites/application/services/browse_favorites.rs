use async_trait::async_trait;
use uuid::Uuid;

use super::query_error;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::favorites::application::domain::{
    normalize_category, Favorite, FavoriteStatus,
};
use crate::modules::favorites::application::ports::incoming::use_cases::{
    CheckFavoriteUseCase, FavoriteError, ListFavoritesUseCase,
};
use crate::modules::favorites::application::ports::outgoing::FavoriteQuery;

pub struct ListFavoritesService<Q>
where
    Q: FavoriteQuery,
{
    query: Q,
}

impl<Q> ListFavoritesService<Q>
where
    Q: FavoriteQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListFavoritesUseCase for ListFavoritesService<Q>
where
    Q: FavoriteQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        category: Option<String>,
    ) -> Result<Vec<Favorite>, FavoriteError> {
        let category = category.as_deref().and_then(normalize_category);
        self.query
            .list_for_user(actor.user_id.value(), category.as_deref())
            .await
            .map_err(query_error)
    }
}

pub struct CheckFavoriteService<Q>
where
    Q: FavoriteQuery,
{
    query: Q,
}

impl<Q> CheckFavoriteService<Q>
where
    Q: FavoriteQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CheckFavoriteUseCase for CheckFavoriteService<Q>
where
    Q: FavoriteQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor, vendor_id: Uuid) -> Result<FavoriteStatus, FavoriteError> {
        let is_favorited = self
            .query
            .is_favorited(actor.user_id.value(), vendor_id)
            .await
            .map_err(query_error)?;

        Ok(FavoriteStatus {
            vendor_id,
            is_favorited,
        })
    }
}
