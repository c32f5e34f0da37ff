use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{NewUser, ProfileUpdate, User};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn mark_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;

    async fn record_login(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    async fn set_active(&self, user_id: Uuid, is_active: bool) -> Result<User, UserRepositoryError>;
}
