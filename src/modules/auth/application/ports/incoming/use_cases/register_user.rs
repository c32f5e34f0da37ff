use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use super::login_user::AuthSession;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterUserCommand {
    #[schema(example = "bride@example.com")]
    pub email: String,
    pub password: String,
    pub name: String,
    /// `customer` (default) or `vendor`.
    pub role: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Name cannot be empty")]
    InvalidName,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Admin accounts cannot be self-registered")]
    AdminRoleNotAllowed,

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token generation failed: {0}")]
    Token(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError>;
}
