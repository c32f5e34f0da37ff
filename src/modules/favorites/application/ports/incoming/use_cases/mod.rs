pub mod add_favorite;
pub mod browse_favorites;
pub mod manage_favorites;

pub use add_favorite::AddFavoriteUseCase;
pub use browse_favorites::{CheckFavoriteUseCase, ListFavoritesUseCase};
pub use manage_favorites::{
    RemoveFavoriteUseCase, RemoveVendorFavoriteUseCase, UpdateFavoriteUseCase,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FavoriteError {
    #[error("Favorite not found")]
    NotFound,

    #[error("Vendor not found")]
    VendorNotFound,

    #[error("Vendor already in favorites")]
    AlreadyExists,

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
