use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangePasswordCommand {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Current password is incorrect")]
    InvalidCredentials,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("User not found")]
    NotFound,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError>;
}
