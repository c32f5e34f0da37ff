use async_trait::async_trait;
use tracing::info;

use super::{query_error, repository_error};
use crate::modules::auth::application::domain::entities::{Actor, Role};
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::ideas::application::domain::{Idea, IdeaRequest, NewIdea};
use crate::modules::ideas::application::ports::incoming::use_cases::{
    CreateIdeaUseCase, IdeaError,
};
use crate::modules::ideas::application::ports::outgoing::IdeaRepository;

/// Vendors write ideas; they stay unpublished until an update publishes them.
pub struct CreateIdeaService<U, R>
where
    U: UserQuery,
    R: IdeaRepository,
{
    users: U,
    repository: R,
}

impl<U, R> CreateIdeaService<U, R>
where
    U: UserQuery,
    R: IdeaRepository,
{
    pub fn new(users: U, repository: R) -> Self {
        Self { users, repository }
    }
}

#[async_trait]
impl<U, R> CreateIdeaUseCase for CreateIdeaService<U, R>
where
    U: UserQuery + Send + Sync,
    R: IdeaRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, request: IdeaRequest) -> Result<Idea, IdeaError> {
        if actor.role != Role::Vendor {
            return Err(IdeaError::Forbidden("Only vendors can create ideas".into()));
        }

        let author = self
            .users
            .find_by_id(actor.user_id.value())
            .await
            .map_err(query_error)?
            .filter(|u| u.is_active)
            .ok_or(IdeaError::UserNotFound)?;

        let idea = NewIdea::from_request(author.id, &author.name, author.role.as_str(), request)
            .map_err(IdeaError::Validation)?;

        let created = self
            .repository
            .create(idea)
            .await
            .map_err(repository_error)?;

        info!(idea_id = %created.id, author_id = %created.author_id, "Idea created");
        Ok(created)
    }
}
