use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ideas::application::domain::{Idea, NewIdea};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdeaRepositoryError {
    #[error("Idea not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Counter updates are single atomic statements against the stored row.
#[async_trait]
pub trait IdeaRepository: Send + Sync {
    async fn create(&self, idea: NewIdea) -> Result<Idea, IdeaRepositoryError>;

    async fn save(&self, idea: &Idea) -> Result<Idea, IdeaRepositoryError>;

    async fn soft_delete(&self, idea_id: Uuid) -> Result<(), IdeaRepositoryError>;

    async fn increment_views(&self, idea_id: Uuid) -> Result<(), IdeaRepositoryError>;

    /// `+1` when liked, otherwise `-1` without going below zero. Returns the new count.
    async fn adjust_likes(&self, idea_id: Uuid, liked: bool) -> Result<i32, IdeaRepositoryError>;

    async fn increment_shares(&self, idea_id: Uuid) -> Result<i32, IdeaRepositoryError>;
}
