use async_trait::async_trait;
use uuid::Uuid;

use super::IdeaError;
use crate::modules::ideas::application::domain::{Idea, IdeaFilter, IdeaSort, TrendingIdea};
use crate::shared::pagination::{PageRequest, PageResult};

#[async_trait]
pub trait ListIdeasUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: IdeaFilter,
        sort: IdeaSort,
        page: PageRequest,
    ) -> Result<PageResult<Idea>, IdeaError>;
}

/// Counts the view.
#[async_trait]
pub trait GetIdeaUseCase: Send + Sync {
    async fn execute(&self, idea_id: Uuid) -> Result<Idea, IdeaError>;
}

#[async_trait]
pub trait TrendingIdeasUseCase: Send + Sync {
    async fn execute(&self, limit: u64) -> Result<Vec<TrendingIdea>, IdeaError>;
}

#[async_trait]
pub trait RelatedIdeasUseCase: Send + Sync {
    async fn execute(&self, idea_id: Uuid, limit: u64) -> Result<Vec<Idea>, IdeaError>;
}
