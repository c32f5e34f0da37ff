use async_trait::async_trait;

use super::FavoriteError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::favorites::application::domain::{Favorite, FavoriteRequest};

#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, req: FavoriteRequest)
        -> Result<Favorite, FavoriteError>;
}
