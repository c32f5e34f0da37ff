use async_trait::async_trait;
use uuid::Uuid;

use super::IdeaError;
use crate::modules::ideas::application::domain::LikeOutcome;

#[async_trait]
pub trait LikeIdeaUseCase: Send + Sync {
    async fn execute(&self, idea_id: Uuid, liked: bool) -> Result<LikeOutcome, IdeaError>;
}

/// Returns the new share count.
#[async_trait]
pub trait ShareIdeaUseCase: Send + Sync {
    async fn execute(&self, idea_id: Uuid) -> Result<i32, IdeaError>;
}
