use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::planning::application::domain::Planning;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanningQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PlanningQuery: Send + Sync {
    /// The user's active plan.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Planning>, PlanningQueryError>;
}
