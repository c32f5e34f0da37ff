use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::repository_error;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::favorites::application::domain::{Favorite, FavoriteChanges};
use crate::modules::favorites::application::ports::incoming::use_cases::{
    FavoriteError, RemoveFavoriteUseCase, RemoveVendorFavoriteUseCase, UpdateFavoriteUseCase,
};
use crate::modules::favorites::application::ports::outgoing::FavoriteRepository;

pub struct UpdateFavoriteService<R>
where
    R: FavoriteRepository,
{
    repository: R,
}

impl<R> UpdateFavoriteService<R>
where
    R: FavoriteRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateFavoriteUseCase for UpdateFavoriteService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        favorite_id: Uuid,
        changes: FavoriteChanges,
    ) -> Result<Favorite, FavoriteError> {
        if changes.is_empty() {
            return Err(FavoriteError::Validation("No fields to update".into()));
        }
        changes.validate().map_err(FavoriteError::Validation)?;

        self.repository
            .update(actor.user_id.value(), favorite_id, changes)
            .await
            .map_err(repository_error)
    }
}

pub struct RemoveFavoriteService<R>
where
    R: FavoriteRepository,
{
    repository: R,
}

impl<R> RemoveFavoriteService<R>
where
    R: FavoriteRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveFavoriteUseCase for RemoveFavoriteService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, favorite_id: Uuid) -> Result<(), FavoriteError> {
        self.repository
            .delete(actor.user_id.value(), favorite_id)
            .await
            .map_err(repository_error)?;

        info!(favorite_id = %favorite_id, "Favorite removed");
        Ok(())
    }
}

pub struct RemoveVendorFavoriteService<R>
where
    R: FavoriteRepository,
{
    repository: R,
}

impl<R> RemoveVendorFavoriteService<R>
where
    R: FavoriteRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveVendorFavoriteUseCase for RemoveVendorFavoriteService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, vendor_id: Uuid) -> Result<(), FavoriteError> {
        self.repository
            .delete_by_vendor(actor.user_id.value(), vendor_id)
            .await
            .map_err(repository_error)?;

        info!(vendor_id = %vendor_id, "Favorite removed by vendor");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::favorites::application::domain::FavoriteRequest;
    use crate::modules::favorites::application::ports::incoming::use_cases::AddFavoriteUseCase;
    use crate::modules::favorites::application::services::test_support::InMemoryFavorites;
    use crate::modules::favorites::application::services::AddFavoriteService;
    use crate::tests::support::stubs::{sample_favorite, StubVendorLookup};

    #[tokio::test]
    async fn update_replaces_notes_and_blank_category_clears() {
        let customer = Uuid::new_v4();
        let favorite = sample_favorite(Uuid::new_v4(), customer, Uuid::new_v4());
        let store = InMemoryFavorites::with(vec![favorite.clone()]);

        let updated = UpdateFavoriteService::new(store)
            .execute(
                Actor::new(customer, Role::Customer),
                favorite.id,
                FavoriteChanges {
                    notes: Some(" Booked a tasting ".into()),
                    category: Some("  ".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.notes.as_deref(), Some("Booked a tasting"));
        assert_eq!(updated.category, None);
    }

    #[tokio::test]
    async fn another_users_favorite_is_not_found() {
        let favorite = sample_favorite(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let store = InMemoryFavorites::with(vec![favorite.clone()]);

        let err = UpdateFavoriteService::new(store)
            .execute(
                Actor::new(Uuid::new_v4(), Role::Customer),
                favorite.id,
                FavoriteChanges {
                    notes: Some("Mine".into()),
                    category: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, FavoriteError::NotFound);
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let store = InMemoryFavorites::with(vec![]);

        assert!(matches!(
            UpdateFavoriteService::new(store)
                .execute(
                    Actor::new(Uuid::new_v4(), Role::Customer),
                    Uuid::new_v4(),
                    FavoriteChanges::default(),
                )
                .await,
            Err(FavoriteError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn removed_favorite_can_be_saved_again() {
        let (customer, vendor_id) = (Uuid::new_v4(), Uuid::new_v4());
        let favorite = sample_favorite(Uuid::new_v4(), customer, vendor_id);
        let store = InMemoryFavorites::with(vec![favorite.clone()]);
        let actor = Actor::new(customer, Role::Customer);

        RemoveFavoriteService::new(store.clone())
            .execute(actor, favorite.id)
            .await
            .unwrap();
        assert!(store.all().is_empty());

        AddFavoriteService::new(
            StubVendorLookup::owned(vendor_id, Uuid::new_v4()),
            store.clone(),
        )
        .execute(
            actor,
            FavoriteRequest {
                vendor_id,
                notes: None,
                category: None,
            },
        )
        .await
        .unwrap();

        RemoveVendorFavoriteService::new(store.clone())
            .execute(actor, vendor_id)
            .await
            .unwrap();
        assert!(store.all().is_empty());
    }

    #[tokio::test]
    async fn removing_an_unsaved_vendor_is_not_found() {
        let store = InMemoryFavorites::with(vec![]);

        assert_eq!(
            RemoveVendorFavoriteService::new(store)
                .execute(Actor::new(Uuid::new_v4(), Role::Customer), Uuid::new_v4())
                .await
                .unwrap_err(),
            FavoriteError::NotFound
        );
    }
}
