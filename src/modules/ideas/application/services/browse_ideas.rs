use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use super::{feed_limit, query_error};
use crate::modules::ideas::application::domain::{
    rank_by_trending, rank_by_trending_ascending, Idea, IdeaFilter, IdeaSort, TrendingIdea,
};
use crate::modules::ideas::application::ports::incoming::use_cases::{
    GetIdeaUseCase, IdeaError, ListIdeasUseCase, RelatedIdeasUseCase, TrendingIdeasUseCase,
};
use crate::modules::ideas::application::ports::outgoing::{IdeaQuery, IdeaRepository};
use crate::shared::pagination::{PageRequest, PageResult, SortOrder};

/// The trending sort ranks the whole filtered set in memory before paginating;
/// every other sort is left to the database.
pub struct ListIdeasService<Q>
where
    Q: IdeaQuery,
{
    query: Q,
}

impl<Q> ListIdeasService<Q>
where
    Q: IdeaQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListIdeasUseCase for ListIdeasService<Q>
where
    Q: IdeaQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: IdeaFilter,
        sort: IdeaSort,
        page: PageRequest,
    ) -> Result<PageResult<Idea>, IdeaError> {
        if !sort.is_trending() {
            return self
                .query
                .list(filter, sort, page)
                .await
                .map_err(query_error);
        }

        let candidates = self.query.all_matching(filter).await.map_err(query_error)?;
        let ranked = match sort.order {
            SortOrder::Desc => rank_by_trending(candidates, Utc::now()),
            SortOrder::Asc => rank_by_trending_ascending(candidates, Utc::now()),
        };
        let ranked: Vec<Idea> = ranked.into_iter().map(|t| t.idea).collect();

        Ok(PageResult::from_ordered(ranked, page))
    }
}

pub struct GetIdeaService<Q, R>
where
    Q: IdeaQuery,
    R: IdeaRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> GetIdeaService<Q, R>
where
    Q: IdeaQuery,
    R: IdeaRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> GetIdeaUseCase for GetIdeaService<Q, R>
where
    Q: IdeaQuery + Send + Sync,
    R: IdeaRepository + Send + Sync,
{
    async fn execute(&self, idea_id: Uuid) -> Result<Idea, IdeaError> {
        let mut idea = self
            .query
            .find_by_id(idea_id)
            .await
            .map_err(query_error)?
            .filter(|i| i.is_published)
            .ok_or(IdeaError::NotFound)?;

        match self.repository.increment_views(idea_id).await {
            Ok(()) => idea.view_count += 1,
            Err(e) => warn!(idea_id = %idea_id, error = %e, "Failed to count idea view"),
        }

        Ok(idea)
    }
}

pub struct TrendingIdeasService<Q>
where
    Q: IdeaQuery,
{
    query: Q,
}

impl<Q> TrendingIdeasService<Q>
where
    Q: IdeaQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> TrendingIdeasUseCase for TrendingIdeasService<Q>
where
    Q: IdeaQuery + Send + Sync,
{
    async fn execute(&self, limit: u64) -> Result<Vec<TrendingIdea>, IdeaError> {
        let limit = feed_limit(limit);

        // Candidates are the newest 2·limit ideas.
        let candidates = self
            .query
            .newest_published(limit * 2)
            .await
            .map_err(query_error)?;

        let mut ranked = rank_by_trending(candidates, Utc::now());
        ranked.truncate(limit as usize);
        Ok(ranked)
    }
}

pub struct RelatedIdeasService<Q>
where
    Q: IdeaQuery,
{
    query: Q,
}

impl<Q> RelatedIdeasService<Q>
where
    Q: IdeaQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> RelatedIdeasUseCase for RelatedIdeasService<Q>
where
    Q: IdeaQuery + Send + Sync,
{
    async fn execute(&self, idea_id: Uuid, limit: u64) -> Result<Vec<Idea>, IdeaError> {
        let idea = self
            .query
            .find_by_id(idea_id)
            .await
            .map_err(query_error)?
            .filter(|i| i.is_published)
            .ok_or(IdeaError::NotFound)?;

        self.query
            .related(&idea, feed_limit(limit))
            .await
            .map_err(query_error)
    }
}
