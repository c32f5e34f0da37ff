use std::sync::Arc;

use crate::modules::favorites::application::ports::incoming::use_cases::{
    AddFavoriteUseCase, CheckFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase,
    RemoveVendorFavoriteUseCase, UpdateFavoriteUseCase,
};

#[derive(Clone)]
pub struct FavoriteUseCases {
    pub add: Arc<dyn AddFavoriteUseCase + Send + Sync>,
    pub list: Arc<dyn ListFavoritesUseCase + Send + Sync>,
    pub check: Arc<dyn CheckFavoriteUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateFavoriteUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveFavoriteUseCase + Send + Sync>,
    pub remove_by_vendor: Arc<dyn RemoveVendorFavoriteUseCase + Send + Sync>,
}
