use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::incoming::use_cases::{
    VerifyEmailError, VerifyEmailUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    TokenProvider, UserRepository, UserRepositoryError,
};

pub struct VerifyEmailService<R>
where
    R: UserRepository,
{
    repository: R,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> VerifyEmailService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { repository, tokens }
    }
}

#[async_trait]
impl<R> VerifyEmailUseCase for VerifyEmailService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, token: String) -> Result<User, VerifyEmailError> {
        let user_id = self
            .tokens
            .verify_verification_token(&token)
            .map_err(|_| VerifyEmailError::InvalidToken)?;

        let user = self
            .repository
            .mark_verified(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => VerifyEmailError::UserNotFound,
                other => VerifyEmailError::Repository(other.to_string()),
            })?;

        info!(user_id = %user.id, "Email verified");
        Ok(user)
    }
}
