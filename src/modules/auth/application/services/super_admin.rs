use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::SuperAdminSeed;
use crate::modules::auth::application::domain::credentials::{normalize_email, validate_password};
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::incoming::use_cases::{
    SuperAdminInfo, SuperAdminLoginError, SuperAdminLoginUseCase, SuperAdminSession,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, SuperAdminRepository, SuperAdminRepositoryError, TokenProvider,
};

pub struct SuperAdminLoginService<S>
where
    S: SuperAdminRepository,
{
    repository: S,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<S> SuperAdminLoginService<S>
where
    S: SuperAdminRepository,
{
    pub fn new(
        repository: S,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<S> SuperAdminLoginUseCase for SuperAdminLoginService<S>
where
    S: SuperAdminRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: String,
        password: String,
    ) -> Result<SuperAdminSession, SuperAdminLoginError> {
        let email = normalize_email(&email).map_err(|_| SuperAdminLoginError::InvalidCredentials)?;

        let admin = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| SuperAdminLoginError::Repository(e.to_string()))?
            .ok_or(SuperAdminLoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&password, &admin.password_hash)
            .await
            .map_err(|e| SuperAdminLoginError::Hashing(e.to_string()))?;
        if !matches {
            warn!(email = %email, "Failed super admin login");
            return Err(SuperAdminLoginError::InvalidCredentials);
        }

        if !admin.is_active {
            return Err(SuperAdminLoginError::AccountDisabled);
        }

        if let Err(e) = self.repository.record_login(admin.id).await {
            warn!(admin_id = %admin.id, error = %e, "Failed to record super admin login");
        }

        let access_token = self
            .tokens
            .generate_access_token(admin.id, Role::SuperAdmin, true)
            .map_err(|e| SuperAdminLoginError::Token(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(admin.id, Role::SuperAdmin, true)
            .map_err(|e| SuperAdminLoginError::Token(e.to_string()))?;

        info!(admin_id = %admin.id, "Super admin logged in");

        Ok(SuperAdminSession {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            admin: SuperAdminInfo {
                id: admin.id,
                email: admin.email,
                name: admin.name,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid super admin seed: {0}")]
    Invalid(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Creates the configured super admin at startup when the account does not exist yet.
pub struct SuperAdminSeeder<S>
where
    S: SuperAdminRepository,
{
    repository: S,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<S> SuperAdminSeeder<S>
where
    S: SuperAdminRepository,
{
    pub fn new(repository: S, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self { repository, hasher }
    }

    /// Returns `true` when a new account was created.
    pub async fn seed(&self, seed: &SuperAdminSeed) -> Result<bool, SeedError> {
        let email = normalize_email(&seed.email).map_err(|e| SeedError::Invalid(e.to_string()))?;
        validate_password(&seed.password).map_err(|e| SeedError::Invalid(e.to_string()))?;

        let existing = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| SeedError::Repository(e.to_string()))?;
        if existing.is_some() {
            return Ok(false);
        }

        let password_hash = self
            .hasher
            .hash_password(&seed.password)
            .await
            .map_err(|e| SeedError::Hashing(e.to_string()))?;

        match self
            .repository
            .create(email.clone(), password_hash, seed.name.clone())
            .await
        {
            Ok(admin) => {
                info!(admin_id = %admin.id, email = %email, "Super admin created");
                Ok(true)
            }
            // Another instance won the race.
            Err(SuperAdminRepositoryError::AlreadyExists) => Ok(false),
            Err(e) => Err(SeedError::Repository(e.to_string())),
        }
    }
}
