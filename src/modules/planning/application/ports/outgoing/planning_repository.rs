use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::planning::application::domain::{NewPlanning, Planning};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanningRepositoryError {
    #[error("Planning document not found")]
    NotFound,

    #[error("Planning document already exists for this user")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PlanningRepository: Send + Sync {
    async fn create(&self, planning: NewPlanning) -> Result<Planning, PlanningRepositoryError>;

    /// Writes the details, every section list and the progress in one statement.
    async fn save(&self, planning: &Planning) -> Result<Planning, PlanningRepositoryError>;

    async fn soft_delete(&self, planning_id: Uuid) -> Result<(), PlanningRepositoryError>;
}
