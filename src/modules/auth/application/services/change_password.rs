use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::modules::auth::application::domain::credentials::validate_password;
use crate::modules::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

pub struct ChangePasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ChangePasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ChangePasswordUseCase for ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ChangePasswordError::Repository(e.to_string()))?
            .filter(|u| u.is_active)
            .ok_or(ChangePasswordError::NotFound)?;

        let matches = self
            .hasher
            .verify_password(&command.current_password, &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::Hashing(e.to_string()))?;
        if !matches {
            return Err(ChangePasswordError::InvalidCredentials);
        }

        validate_password(&command.new_password)
            .map_err(|e| ChangePasswordError::InvalidPassword(e.to_string()))?;

        let new_hash = self
            .hasher
            .hash_password(&command.new_password)
            .await
            .map_err(|e| ChangePasswordError::Hashing(e.to_string()))?;

        self.repository
            .update_password(user_id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => ChangePasswordError::NotFound,
                other => ChangePasswordError::Repository(other.to_string()),
            })?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}
