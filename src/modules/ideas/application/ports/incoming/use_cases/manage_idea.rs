use async_trait::async_trait;
use uuid::Uuid;

use super::IdeaError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::ideas::application::domain::{Idea, IdeaChanges};

#[async_trait]
pub trait UpdateIdeaUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        idea_id: Uuid,
        changes: IdeaChanges,
    ) -> Result<Idea, IdeaError>;
}

#[async_trait]
pub trait DeleteIdeaUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, idea_id: Uuid) -> Result<(), IdeaError>;
}
