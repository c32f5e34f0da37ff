use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::auth::application::domain::credentials::{normalize_email, validate_password};
use crate::modules::auth::application::domain::entities::{NewUser, Role, UnknownRole};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthSession, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
};
use crate::modules::email::application::ports::incoming::AccountNotifier;
use crate::shared::validation::{is_valid_phone, non_blank};

pub struct RegisterUserService<R>
where
    R: UserRepository,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        notifier: Arc<dyn AccountNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            notifier,
        }
    }

    fn resolve_role(role: Option<&str>) -> Result<Role, RegisterUserError> {
        let Some(raw) = role.and_then(non_blank) else {
            return Ok(Role::Customer);
        };

        match raw.parse::<Role>() {
            Ok(role) if role.is_admin() => Err(RegisterUserError::AdminRoleNotAllowed),
            Ok(role) => Ok(role),
            Err(UnknownRole(other)) => Err(RegisterUserError::InvalidRole(other)),
        }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        let email = normalize_email(&command.email)
            .map_err(|e| RegisterUserError::InvalidEmail(e.to_string()))?;
        validate_password(&command.password)
            .map_err(|e| RegisterUserError::InvalidPassword(e.to_string()))?;
        let name = non_blank(&command.name).ok_or(RegisterUserError::InvalidName)?;
        let role = Self::resolve_role(command.role.as_deref())?;

        let phone = command.phone.as_deref().and_then(non_blank);
        if let Some(phone) = &phone {
            if !is_valid_phone(phone) {
                return Err(RegisterUserError::InvalidPhone);
            }
        }

        let password_hash = self
            .hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| RegisterUserError::Hashing(e.to_string()))?;

        let user = self
            .repository
            .create_user(NewUser {
                email,
                password_hash,
                name,
                role,
                phone,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::Repository(other.to_string()),
            })?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        match self.tokens.generate_verification_token(user.id, user.role) {
            Ok(token) => {
                if let Err(e) = self
                    .notifier
                    .send_verification_email(&user.email, &user.name, &token)
                    .await
                {
                    warn!(user_id = %user.id, error = %e, "Failed to send verification email");
                }
            }
            Err(e) => warn!(user_id = %user.id, error = %e, "Failed to create verification token"),
        }

        let access_token = self
            .tokens
            .generate_access_token(user.id, user.role, user.is_verified)
            .map_err(|e| RegisterUserError::Token(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(user.id, user.role, user.is_verified)
            .map_err(|e| RegisterUserError::Token(e.to_string()))?;

        Ok(AuthSession::bearer(access_token, refresh_token, user))
    }
}
