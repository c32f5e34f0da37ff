use async_trait::async_trait;
use uuid::Uuid;

use super::PlanningError;
use crate::modules::planning::application::domain::{
    Planning, PlanningSection, SectionItemChanges, SectionItems,
};

#[async_trait]
pub trait AddPlanningItemsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, items: SectionItems) -> Result<Planning, PlanningError>;
}

#[async_trait]
pub trait UpdatePlanningItemUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        changes: SectionItemChanges,
    ) -> Result<Planning, PlanningError>;
}

#[async_trait]
pub trait RemovePlanningItemUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        section: PlanningSection,
        item_id: Uuid,
    ) -> Result<Planning, PlanningError>;
}
