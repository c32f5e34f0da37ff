use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::auth::application::domain::entities::User;

/// Tokens plus the account they were issued for.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: User,
}

impl AuthSession {
    pub fn bearer(access_token: String, refresh_token: String, user: User) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account has been disabled")]
    AccountDisabled,

    #[error("Password verification failed: {0}")]
    Hashing(String),

    #[error("Token generation failed: {0}")]
    Token(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, email: String, password: String) -> Result<AuthSession, LoginError>;
}
