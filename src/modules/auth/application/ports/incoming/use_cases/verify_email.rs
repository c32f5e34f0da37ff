use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("Invalid or expired verification token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait VerifyEmailUseCase: Send + Sync {
    async fn execute(&self, token: String) -> Result<User, VerifyEmailError>;
}
