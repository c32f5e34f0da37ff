use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{ProfileUpdate, User};
use crate::modules::auth::application::ports::incoming::use_cases::{
    GetProfileUseCase, ProfileError, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::validation::{is_valid_phone, non_blank};

pub struct GetProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<User, ProfileError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| ProfileError::Repository(e.to_string()))?
            .filter(|u| u.is_active)
            .ok_or(ProfileError::NotFound)
    }
}

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn sanitize(update: ProfileUpdate) -> Result<ProfileUpdate, ProfileError> {
        let name = match update.name {
            Some(name) => Some(
                non_blank(&name)
                    .ok_or_else(|| ProfileError::InvalidField("Name cannot be empty".into()))?,
            ),
            None => None,
        };

        if let Some(phone) = &update.phone {
            if !is_valid_phone(phone) {
                return Err(ProfileError::InvalidField("Invalid phone number".into()));
            }
        }

        if update.budget.is_some_and(|b| !b.is_finite() || b < 0.0) {
            return Err(ProfileError::InvalidField(
                "Budget must be a non-negative amount".into(),
            ));
        }

        Ok(ProfileUpdate { name, ..update })
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, update: ProfileUpdate) -> Result<User, ProfileError> {
        let update = Self::sanitize(update)?;

        self.repository
            .update_profile(user_id, update)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => ProfileError::NotFound,
                other => ProfileError::Repository(other.to_string()),
            })
    }
}
