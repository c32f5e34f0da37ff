use async_trait::async_trait;
use uuid::Uuid;

use super::AdminError;
use crate::modules::admin::application::domain::{UserListFilter, UserSort, UserStatusChange};
use crate::modules::auth::application::domain::entities::User;
use crate::shared::pagination::{PageRequest, PageResult};

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: UserListFilter,
        sort: UserSort,
        page: PageRequest,
    ) -> Result<PageResult<User>, AdminError>;
}

#[async_trait]
pub trait UpdateUserStatusUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, change: UserStatusChange) -> Result<User, AdminError>;
}
