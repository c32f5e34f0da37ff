pub mod add_favorite;
pub mod browse_favorites;
pub mod manage_favorites;

pub use add_favorite::AddFavoriteService;
pub use browse_favorites::{CheckFavoriteService, ListFavoritesService};
pub use manage_favorites::{
    RemoveFavoriteService, RemoveVendorFavoriteService, UpdateFavoriteService,
};

use crate::modules::favorites::application::ports::incoming::use_cases::FavoriteError;
use crate::modules::favorites::application::ports::outgoing::{
    FavoriteQueryError, FavoriteRepositoryError,
};

fn repository_error(e: FavoriteRepositoryError) -> FavoriteError {
    match e {
        FavoriteRepositoryError::NotFound => FavoriteError::NotFound,
        FavoriteRepositoryError::AlreadyExists => FavoriteError::AlreadyExists,
        FavoriteRepositoryError::DatabaseError(msg) => FavoriteError::Repository(msg),
    }
}

fn query_error(e: FavoriteQueryError) -> FavoriteError {
    FavoriteError::Repository(e.to_string())
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::favorites::application::domain::{
        normalize_category, Favorite, FavoriteChanges, NewFavorite,
    };
    use crate::modules::favorites::application::ports::outgoing::{
        FavoriteQuery, FavoriteQueryError, FavoriteRepository, FavoriteRepositoryError,
    };
    use crate::shared::validation::non_blank;
    use crate::tests::support::stubs::sample_favorite;

    /// Favorites kept in insertion order; listing returns them newest first.
    #[derive(Default)]
    pub struct InMemoryFavorites {
        pub rows: Mutex<Vec<Favorite>>,
    }

    impl InMemoryFavorites {
        pub fn with(favorites: Vec<Favorite>) -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(favorites),
            })
        }

        pub fn all(&self) -> Vec<Favorite> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FavoriteQuery for Arc<InMemoryFavorites> {
        async fn list_for_user(
            &self,
            user_id: Uuid,
            category: Option<&str>,
        ) -> Result<Vec<Favorite>, FavoriteQueryError> {
            Ok(self
                .all()
                .into_iter()
                .rev()
                .filter(|f| f.user_id == user_id)
                .filter(|f| category.map_or(true, |c| f.category.as_deref() == Some(c)))
                .collect())
        }

        async fn find_for_user(
            &self,
            user_id: Uuid,
            favorite_id: Uuid,
        ) -> Result<Option<Favorite>, FavoriteQueryError> {
            Ok(self
                .all()
                .into_iter()
                .find(|f| f.id == favorite_id && f.user_id == user_id))
        }

        async fn is_favorited(
            &self,
            user_id: Uuid,
            vendor_id: Uuid,
        ) -> Result<bool, FavoriteQueryError> {
            Ok(self
                .all()
                .iter()
                .any(|f| f.user_id == user_id && f.vendor_id == vendor_id))
        }
    }

    #[async_trait]
    impl FavoriteRepository for Arc<InMemoryFavorites> {
        async fn create(&self, new: NewFavorite) -> Result<Favorite, FavoriteRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|f| f.user_id == new.user_id && f.vendor_id == new.vendor_id)
            {
                return Err(FavoriteRepositoryError::AlreadyExists);
            }

            let mut favorite = sample_favorite(Uuid::new_v4(), new.user_id, new.vendor_id);
            favorite.notes = new.notes;
            favorite.category = new.category;
            favorite.vendor = None;
            rows.push(favorite.clone());
            Ok(favorite)
        }

        async fn update(
            &self,
            user_id: Uuid,
            favorite_id: Uuid,
            changes: FavoriteChanges,
        ) -> Result<Favorite, FavoriteRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let favorite = rows
                .iter_mut()
                .find(|f| f.id == favorite_id && f.user_id == user_id)
                .ok_or(FavoriteRepositoryError::NotFound)?;

            if let Some(notes) = changes.notes {
                favorite.notes = non_blank(&notes);
            }
            if let Some(category) = changes.category {
                favorite.category = normalize_category(&category);
            }
            favorite.updated_at = Utc::now();
            Ok(favorite.clone())
        }

        async fn delete(
            &self,
            user_id: Uuid,
            favorite_id: Uuid,
        ) -> Result<(), FavoriteRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|f| !(f.id == favorite_id && f.user_id == user_id));
            if rows.len() == before {
                return Err(FavoriteRepositoryError::NotFound);
            }
            Ok(())
        }

        async fn delete_by_vendor(
            &self,
            user_id: Uuid,
            vendor_id: Uuid,
        ) -> Result<(), FavoriteRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|f| !(f.vendor_id == vendor_id && f.user_id == user_id));
            if rows.len() == before {
                return Err(FavoriteRepositoryError::NotFound);
            }
            Ok(())
        }
    }
}
