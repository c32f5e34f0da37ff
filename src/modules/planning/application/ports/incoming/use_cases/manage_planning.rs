use async_trait::async_trait;
use uuid::Uuid;

use super::PlanningError;
use crate::modules::planning::application::domain::{
    Planning, PlanningChanges, PlanningRequest, PlanningStats,
};

#[async_trait]
pub trait CreatePlanningUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, request: PlanningRequest)
        -> Result<Planning, PlanningError>;
}

#[async_trait]
pub trait GetPlanningUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Planning, PlanningError>;
}

#[async_trait]
pub trait UpdatePlanningUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        changes: PlanningChanges,
    ) -> Result<Planning, PlanningError>;
}

#[async_trait]
pub trait DeletePlanningUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), PlanningError>;
}

#[async_trait]
pub trait PlanningStatsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PlanningStats, PlanningError>;
}
