use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column, Entity as UserEntity, Model as UserModel,
};
use super::user_query_postgres::user_from_model;
use crate::modules::auth::application::domain::entities::{NewUser, ProfileUpdate, User};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserRepositoryError> {
        user_from_model(model).map_err(UserRepositoryError::DatabaseError)
    }

    async fn find_model(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn save(&self, active: UserActiveModel) -> Result<User, UserRepositoryError> {
        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Self::to_domain(updated)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            name: Set(user.name),
            role: Set(user.role.as_str().to_string()),
            phone: Set(user.phone),
            address: Set(None),
            city: Set(None),
            wedding_date: Set(None),
            budget: Set(None),
            is_verified: Set(false),
            is_active: Set(true),
            last_login_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::EmailAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::to_domain(inserted)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, UserRepositoryError> {
        let model = self.find_model(user_id).await?;
        if !model.is_active {
            return Err(UserRepositoryError::NotFound);
        }

        let mut active: UserActiveModel = model.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(phone) = update.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(address) = update.address {
            active.address = Set(Some(address));
        }
        if let Some(city) = update.city {
            active.city = Set(Some(city));
        }
        if let Some(date) = update.wedding_date {
            active.wedding_date = Set(Some(date));
        }
        if let Some(budget) = update.budget {
            active.budget = Set(Some(budget));
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        self.save(active).await
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(Column::PasswordHash, Expr::value(new_password_hash))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let model = self.find_model(user_id).await?;
        if model.is_verified {
            return Self::to_domain(model);
        }

        let mut active: UserActiveModel = model.into();
        active.is_verified = Set(true);
        active.updated_at = Set(Utc::now().fixed_offset());

        self.save(active).await
    }

    async fn record_login(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        UserEntity::update_many()
            .col_expr(Column::LastLoginAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn set_active(&self, user_id: Uuid, is_active: bool) -> Result<User, UserRepositoryError> {
        let model = self.find_model(user_id).await?;

        let mut active: UserActiveModel = model.into();
        active.is_active = Set(is_active);
        active.updated_at = Set(Utc::now().fixed_offset());

        self.save(active).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::tests::support::fixtures::user_model;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn new_user() -> NewUser {
        NewUser {
            email: "couple@example.com".into(),
            password_hash: "hash".into(),
            name: "Couple".into(),
            role: Role::Customer,
            phone: None,
        }
    }

    // =====================================================
    // create_user
    // =====================================================

    #[tokio::test]
    async fn create_user_returns_inserted_row() {
        let model = user_model(Uuid::new_v4(), "customer");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model.clone()]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo.create_user(new_user()).await.unwrap();

        assert_eq!(user.id, model.id);
        assert_eq!(user.role, Role::Customer);
    }

    #[tokio::test]
    async fn create_user_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"users_email_key\"".into(),
            ))])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.create_user(new_user()).await.unwrap_err(),
            UserRepositoryError::EmailAlreadyExists
        );
    }

    // =====================================================
    // updates
    // =====================================================

    #[tokio::test]
    async fn update_profile_of_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<UserModel>::new()])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.update_profile(Uuid::new_v4(), ProfileUpdate::default())
                .await
                .unwrap_err(),
            UserRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn update_profile_returns_updated_row() {
        let id = Uuid::new_v4();
        let before = user_model(id, "customer");
        let mut after = before.clone();
        after.city = Some("Galle".into());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![before], vec![after]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo
            .update_profile(
                id,
                ProfileUpdate {
                    city: Some("Galle".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(user.city.as_deref(), Some("Galle"));
    }

    #[tokio::test]
    async fn update_password_of_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.update_password(Uuid::new_v4(), "h".into())
                .await
                .unwrap_err(),
            UserRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn mark_verified_is_idempotent() {
        let id = Uuid::new_v4();
        let mut verified = user_model(id, "customer");
        verified.is_verified = true;

        // Only the lookup runs when the user is already verified.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![verified]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        assert!(repo.mark_verified(id).await.unwrap().is_verified);
    }

    #[tokio::test]
    async fn set_active_flips_flag() {
        let id = Uuid::new_v4();
        let before = user_model(id, "vendor");
        let mut after = before.clone();
        after.is_active = false;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![before], vec![after]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        assert!(!repo.set_active(id, false).await.unwrap().is_active);
    }
}
