use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::super_admins::{
    ActiveModel as SuperAdminActiveModel, Column, Entity as SuperAdminEntity,
    Model as SuperAdminModel,
};
use crate::modules::auth::application::domain::entities::SuperAdmin;
use crate::modules::auth::application::ports::outgoing::{
    SuperAdminRepository, SuperAdminRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct SuperAdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SuperAdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: SuperAdminModel) -> SuperAdmin {
        SuperAdmin {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            name: model.name,
            is_active: model.is_active,
            last_login_at: model.last_login_at.map(|t| t.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl SuperAdminRepository for SuperAdminRepositoryPostgres {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SuperAdmin>, SuperAdminRepositoryError> {
        let model = SuperAdminEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| SuperAdminRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::to_domain))
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
    ) -> Result<SuperAdmin, SuperAdminRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = SuperAdminActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            name: Set(name),
            is_active: Set(true),
            last_login_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return SuperAdminRepositoryError::AlreadyExists;
            }
            SuperAdminRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::to_domain(inserted))
    }

    async fn record_login(&self, id: Uuid) -> Result<(), SuperAdminRepositoryError> {
        SuperAdminEntity::update_many()
            .col_expr(Column::LastLoginAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(|e| SuperAdminRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
