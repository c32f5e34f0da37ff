use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{Column, Entity as UserEntity, Model as UserModel};
use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};

pub(crate) fn user_from_model(model: UserModel) -> Result<User, String> {
    let role = model
        .role
        .parse::<Role>()
        .map_err(|_| format!("unknown role '{}' for user {}", model.role, model.id))?;

    Ok(User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        name: model.name,
        role,
        phone: model.phone,
        address: model.address,
        city: model.city,
        wedding_date: model.wedding_date,
        budget: model.budget,
        is_verified: model.is_verified,
        is_active: model.is_active,
        last_login_at: model.last_login_at.map(|t| t.with_timezone(&Utc)),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map(model: Option<UserModel>) -> Result<Option<User>, UserQueryError> {
        model
            .map(user_from_model)
            .transpose()
            .map_err(UserQueryError::DatabaseError)
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map(model)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map(model)
    }
}
