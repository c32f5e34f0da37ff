use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ideas::application::domain::{Idea, IdeaFilter, IdeaSort};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdeaQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IdeaQuery: Send + Sync {
    /// Active idea, published or not.
    async fn find_by_id(&self, idea_id: Uuid) -> Result<Option<Idea>, IdeaQueryError>;

    /// Database-ordered page. Not used for the trending sort.
    async fn list(
        &self,
        filter: IdeaFilter,
        sort: IdeaSort,
        page: PageRequest,
    ) -> Result<PageResult<Idea>, IdeaQueryError>;

    /// Every published idea matching the filter, newest first.
    async fn all_matching(&self, filter: IdeaFilter) -> Result<Vec<Idea>, IdeaQueryError>;

    async fn newest_published(&self, limit: u64) -> Result<Vec<Idea>, IdeaQueryError>;

    /// Published ideas sharing the category, the type or any tag of `idea`,
    /// most viewed first, then most liked.
    async fn related(&self, idea: &Idea, limit: u64) -> Result<Vec<Idea>, IdeaQueryError>;
}
