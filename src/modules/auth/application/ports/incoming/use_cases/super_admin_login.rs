use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuperAdminInfo {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuperAdminSession {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub admin: SuperAdminInfo,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SuperAdminLoginError {
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
pub trait SuperAdminLoginUseCase: Send + Sync {
    async fn execute(
        &self,
        email: String,
        password: String,
    ) -> Result<SuperAdminSession, SuperAdminLoginError>;
}
