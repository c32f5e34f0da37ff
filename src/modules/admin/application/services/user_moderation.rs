use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::admin::application::domain::{UserListFilter, UserSort, UserStatusChange};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, ListUsersUseCase, UpdateUserStatusUseCase,
};
use crate::modules::admin::application::ports::outgoing::ModerationRepository;
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListUsersService<M>
where
    M: ModerationRepository,
{
    repository: M,
}

impl<M> ListUsersService<M>
where
    M: ModerationRepository,
{
    pub fn new(repository: M) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<M> ListUsersUseCase for ListUsersService<M>
where
    M: ModerationRepository + Send + Sync,
{
    async fn execute(
        &self,
        filter: UserListFilter,
        sort: UserSort,
        page: PageRequest,
    ) -> Result<PageResult<User>, AdminError> {
        self.repository
            .list_users(&filter, sort, page)
            .await
            .map_err(|e| AdminError::Repository(e.to_string()))
    }
}

pub struct UpdateUserStatusService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateUserStatusService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateUserStatusUseCase for UpdateUserStatusService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, change: UserStatusChange) -> Result<User, AdminError> {
        let user = self
            .repository
            .set_active(user_id, change.is_active)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => AdminError::UserNotFound,
                other => AdminError::Repository(other.to_string()),
            })?;

        info!(user_id = %user.id, is_active = user.is_active, "User status updated");
        Ok(user)
    }
}
