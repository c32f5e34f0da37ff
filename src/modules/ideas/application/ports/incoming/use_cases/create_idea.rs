use async_trait::async_trait;

use super::IdeaError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::ideas::application::domain::{Idea, IdeaRequest};

#[async_trait]
pub trait CreateIdeaUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, request: IdeaRequest) -> Result<Idea, IdeaError>;
}
