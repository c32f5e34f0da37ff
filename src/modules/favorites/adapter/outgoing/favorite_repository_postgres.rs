use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::favorite_query_postgres::favorite_from_model;
use super::sea_orm_entity::favorites::{
    ActiveModel as FavoriteActiveModel, Column, Entity as FavoriteEntity,
};
use crate::modules::favorites::application::domain::{
    normalize_category, Favorite, FavoriteChanges, NewFavorite,
};
use crate::modules::favorites::application::ports::outgoing::{
    FavoriteRepository, FavoriteRepositoryError,
};
use crate::shared::db::is_unique_violation;
use crate::shared::validation::non_blank;

#[derive(Clone, Debug)]
pub struct FavoriteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> FavoriteRepositoryError {
    FavoriteRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn create(&self, favorite: NewFavorite) -> Result<Favorite, FavoriteRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = FavoriteActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(favorite.user_id),
            vendor_id: Set(favorite.vendor_id),
            notes: Set(favorite.notes),
            category: Set(favorite.category),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match active.insert(&*self.db).await {
            Ok(model) => Ok(favorite_from_model(model)),
            Err(e) if is_unique_violation(&e) => {
                warn!(vendor_id = %favorite.vendor_id, "Vendor already in favorites");
                Err(FavoriteRepositoryError::AlreadyExists)
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn update(
        &self,
        user_id: Uuid,
        favorite_id: Uuid,
        changes: FavoriteChanges,
    ) -> Result<Favorite, FavoriteRepositoryError> {
        let model = FavoriteEntity::find_by_id(favorite_id)
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(FavoriteRepositoryError::NotFound)?;

        let mut active: FavoriteActiveModel = model.into();
        if let Some(notes) = changes.notes {
            active.notes = Set(non_blank(&notes));
        }
        if let Some(category) = changes.category {
            active.category = Set(normalize_category(&category));
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(db_error)?;
        Ok(favorite_from_model(updated))
    }

    async fn delete(&self, user_id: Uuid, favorite_id: Uuid) -> Result<(), FavoriteRepositoryError> {
        let result = FavoriteEntity::delete_many()
            .filter(Column::Id.eq(favorite_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(FavoriteRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_vendor(
        &self,
        user_id: Uuid,
        vendor_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError> {
        let result = FavoriteEntity::delete_many()
            .filter(Column::VendorId.eq(vendor_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(FavoriteRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::favorites::adapter::outgoing::sea_orm_entity::favorites::Model as FavoriteModel;
    use crate::tests::support::fixtures::favorite_model;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    fn new_favorite(user_id: Uuid, vendor_id: Uuid) -> NewFavorite {
        NewFavorite {
            user_id,
            vendor_id,
            notes: Some("Call after Poya".into()),
            category: Some("photography".into()),
        }
    }

    #[tokio::test]
    async fn create_returns_inserted_row() {
        let (user_id, vendor_id) = (Uuid::new_v4(), Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![favorite_model(Uuid::new_v4(), user_id, vendor_id)]])
            .into_connection();

        let favorite = FavoriteRepositoryPostgres::new(Arc::new(db))
            .create(new_favorite(user_id, vendor_id))
            .await
            .unwrap();

        assert_eq!(favorite.vendor_id, vendor_id);
        assert_eq!(favorite.notes.as_deref(), Some("Call after Poya"));
    }

    #[tokio::test]
    async fn duplicate_pair_is_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"idx_favorites_user_vendor\""
                    .into(),
            ))])
            .into_connection();

        let err = FavoriteRepositoryPostgres::new(Arc::new(db))
            .create(new_favorite(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap_err();

        assert_eq!(err, FavoriteRepositoryError::AlreadyExists);
    }

    #[tokio::test]
    async fn update_of_another_users_favorite_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<FavoriteModel>::new()])
            .into_connection();

        let err = FavoriteRepositoryPostgres::new(Arc::new(db))
            .update(
                Uuid::new_v4(),
                Uuid::new_v4(),
                FavoriteChanges {
                    notes: Some("Mine".into()),
                    category: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, FavoriteRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec(1), exec(0)])
                .into_connection(),
        );
        let repo = FavoriteRepositoryPostgres::new(db.clone());

        assert!(repo.delete(Uuid::new_v4(), Uuid::new_v4()).await.is_ok());
        assert_eq!(
            repo.delete_by_vendor(Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err(),
            FavoriteRepositoryError::NotFound
        );

        drop(repo);
        let statements: Vec<String> = Arc::try_unwrap(db)
            .unwrap()
            .into_transaction_log()
            .iter()
            .flat_map(|t| t.statements().iter().map(|st| st.sql.clone()))
            .collect();
        assert!(statements[0].starts_with(r#"DELETE FROM "favorites""#));
        assert!(statements[1].contains(r#""vendor_id" = $1"#));
    }
}
