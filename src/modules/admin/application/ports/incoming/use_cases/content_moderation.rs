use async_trait::async_trait;
use uuid::Uuid;

use super::AdminError;
use crate::modules::admin::application::domain::{
    ContentFilter, ContentSort, ContentStatusChange, FeaturedChange,
};
use crate::modules::ideas::application::domain::Idea;
use crate::shared::pagination::{PageRequest, PageResult};

#[async_trait]
pub trait ListContentUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ContentFilter,
        sort: ContentSort,
        page: PageRequest,
    ) -> Result<PageResult<Idea>, AdminError>;
}

#[async_trait]
pub trait UpdateContentStatusUseCase: Send + Sync {
    async fn execute(&self, idea_id: Uuid, change: ContentStatusChange) -> Result<Idea, AdminError>;
}

#[async_trait]
pub trait SetFeaturedUseCase: Send + Sync {
    async fn execute(&self, change: FeaturedChange) -> Result<(), AdminError>;
}
