use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{ProfileUpdate, User};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("User not found")]
    NotFound,

    #[error("{0}")]
    InvalidField(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<User, ProfileError>;
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, update: ProfileUpdate) -> Result<User, ProfileError>;
}
