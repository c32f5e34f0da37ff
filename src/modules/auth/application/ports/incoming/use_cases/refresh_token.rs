use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RefreshedToken {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token expected")]
    InvalidTokenType,

    #[error("Invalid or expired refresh token")]
    InvalidToken,

    #[error("Account has been disabled")]
    AccountDisabled,

    #[error("Token generation failed: {0}")]
    Token(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: String) -> Result<RefreshedToken, RefreshTokenError>;
}
