pub mod favorite_query;
pub mod favorite_repository;

pub use favorite_query::{FavoriteQuery, FavoriteQueryError};
pub use favorite_repository::{FavoriteRepository, FavoriteRepositoryError};
