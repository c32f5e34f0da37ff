use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{editable_idea, repository_error};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::ideas::application::domain::{Idea, IdeaChanges};
use crate::modules::ideas::application::ports::incoming::use_cases::{
    DeleteIdeaUseCase, IdeaError, UpdateIdeaUseCase,
};
use crate::modules::ideas::application::ports::outgoing::{IdeaQuery, IdeaRepository};

pub struct UpdateIdeaService<Q, R>
where
    Q: IdeaQuery,
    R: IdeaRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateIdeaService<Q, R>
where
    Q: IdeaQuery,
    R: IdeaRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateIdeaUseCase for UpdateIdeaService<Q, R>
where
    Q: IdeaQuery + Send + Sync,
    R: IdeaRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        idea_id: Uuid,
        changes: IdeaChanges,
    ) -> Result<Idea, IdeaError> {
        if changes.is_empty() {
            return Err(IdeaError::Validation("No fields to update".into()));
        }

        let mut idea = editable_idea(&self.query, actor, idea_id, "update").await?;
        let was_published = idea.is_published;

        idea.apply(changes, Utc::now())
            .map_err(IdeaError::Validation)?;

        let saved = self
            .repository
            .save(&idea)
            .await
            .map_err(repository_error)?;

        if saved.is_published && !was_published {
            info!(idea_id = %saved.id, "Idea published");
        }
        Ok(saved)
    }
}

pub struct DeleteIdeaService<Q, R>
where
    Q: IdeaQuery,
    R: IdeaRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteIdeaService<Q, R>
where
    Q: IdeaQuery,
    R: IdeaRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteIdeaUseCase for DeleteIdeaService<Q, R>
where
    Q: IdeaQuery + Send + Sync,
    R: IdeaRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, idea_id: Uuid) -> Result<(), IdeaError> {
        let idea = editable_idea(&self.query, actor, idea_id, "delete").await?;

        self.repository
            .soft_delete(idea.id)
            .await
            .map_err(repository_error)?;

        info!(idea_id = %idea.id, "Idea deleted");
        Ok(())
    }
}
