use async_trait::async_trait;
use uuid::Uuid;

use super::repository_error;
use crate::modules::ideas::application::domain::LikeOutcome;
use crate::modules::ideas::application::ports::incoming::use_cases::{
    IdeaError, LikeIdeaUseCase, ShareIdeaUseCase,
};
use crate::modules::ideas::application::ports::outgoing::IdeaRepository;

/// Likes are not tracked per user; the counter only moves.
pub struct LikeIdeaService<R>
where
    R: IdeaRepository,
{
    repository: R,
}

impl<R> LikeIdeaService<R>
where
    R: IdeaRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> LikeIdeaUseCase for LikeIdeaService<R>
where
    R: IdeaRepository + Send + Sync,
{
    async fn execute(&self, idea_id: Uuid, liked: bool) -> Result<LikeOutcome, IdeaError> {
        let like_count = self
            .repository
            .adjust_likes(idea_id, liked)
            .await
            .map_err(repository_error)?;

        Ok(LikeOutcome {
            message: if liked { "Idea liked" } else { "Idea unliked" }.to_string(),
            like_count,
        })
    }
}

pub struct ShareIdeaService<R>
where
    R: IdeaRepository,
{
    repository: R,
}

impl<R> ShareIdeaService<R>
where
    R: IdeaRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ShareIdeaUseCase for ShareIdeaService<R>
where
    R: IdeaRepository + Send + Sync,
{
    async fn execute(&self, idea_id: Uuid) -> Result<i32, IdeaError> {
        self.repository
            .increment_shares(idea_id)
            .await
            .map_err(repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ideas::application::services::test_support::InMemoryIdeas;
    use crate::tests::support::stubs::sample_idea;

    #[tokio::test]
    async fn unlike_never_goes_below_zero() {
        let idea = sample_idea(Uuid::new_v4(), Uuid::new_v4());
        let service = LikeIdeaService::new(InMemoryIdeas::with(vec![idea.clone()]));

        let liked = service.execute(idea.id, true).await.unwrap();
        assert_eq!(liked.like_count, 1);
        assert_eq!(liked.message, "Idea liked");

        service.execute(idea.id, false).await.unwrap();
        let floor = service.execute(idea.id, false).await.unwrap();
        assert_eq!(floor.like_count, 0);
        assert_eq!(floor.message, "Idea unliked");
    }

    #[tokio::test]
    async fn share_increments() {
        let idea = sample_idea(Uuid::new_v4(), Uuid::new_v4());
        let service = ShareIdeaService::new(InMemoryIdeas::with(vec![idea.clone()]));

        service.execute(idea.id).await.unwrap();
        assert_eq!(service.execute(idea.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn missing_idea() {
        let service = ShareIdeaService::new(InMemoryIdeas::with(vec![]));
        assert_eq!(
            service.execute(Uuid::new_v4()).await.unwrap_err(),
            IdeaError::NotFound
        );
    }
}
