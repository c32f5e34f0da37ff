use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::auth::application::domain::credentials::normalize_email;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthSession, LoginError, LoginUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository,
};

pub struct LoginUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> LoginUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R> LoginUserUseCase for LoginUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: String, password: String) -> Result<AuthSession, LoginError> {
        let email = normalize_email(&email).map_err(|_| LoginError::InvalidCredentials)?;

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::Repository(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&password, &user.password_hash)
            .await
            .map_err(|e| LoginError::Hashing(e.to_string()))?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        // Checked after the password so disabled accounts are not discoverable.
        if !user.is_active {
            return Err(LoginError::AccountDisabled);
        }

        if let Err(e) = self.repository.record_login(user.id).await {
            warn!(user_id = %user.id, error = %e, "Failed to record last login");
        }

        let access_token = self
            .tokens
            .generate_access_token(user.id, user.role, user.is_verified)
            .map_err(|e| LoginError::Token(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(user.id, user.role, user.is_verified)
            .map_err(|e| LoginError::Token(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession::bearer(access_token, refresh_token, user))
    }
}
