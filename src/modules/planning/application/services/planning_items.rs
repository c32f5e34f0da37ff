use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{active_plan, item_error, repository_error};
use crate::modules::planning::application::domain::{
    Planning, PlanningSection, SectionItemChanges, SectionItems,
};
use crate::modules::planning::application::ports::incoming::use_cases::{
    AddPlanningItemsUseCase, PlanningError, RemovePlanningItemUseCase, UpdatePlanningItemUseCase,
};
use crate::modules::planning::application::ports::outgoing::{PlanningQuery, PlanningRepository};

pub struct AddPlanningItemsService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> AddPlanningItemsService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> AddPlanningItemsUseCase for AddPlanningItemsService<Q, R>
where
    Q: PlanningQuery + Send + Sync,
    R: PlanningRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, items: SectionItems) -> Result<Planning, PlanningError> {
        let mut plan = active_plan(&self.query, user_id).await?;
        plan.add_items(items, Utc::now())
            .map_err(PlanningError::Validation)?;

        let saved = self.repository.save(&plan).await.map_err(repository_error)?;
        info!(planning_id = %saved.id, progress = ?saved.progress, "Planning items added");
        Ok(saved)
    }
}

pub struct UpdatePlanningItemService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdatePlanningItemService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdatePlanningItemUseCase for UpdatePlanningItemService<Q, R>
where
    Q: PlanningQuery + Send + Sync,
    R: PlanningRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        changes: SectionItemChanges,
    ) -> Result<Planning, PlanningError> {
        let mut plan = active_plan(&self.query, user_id).await?;
        plan.update_item(item_id, changes, Utc::now())
            .map_err(item_error)?;

        self.repository.save(&plan).await.map_err(repository_error)
    }
}

pub struct RemovePlanningItemService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> RemovePlanningItemService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RemovePlanningItemUseCase for RemovePlanningItemService<Q, R>
where
    Q: PlanningQuery + Send + Sync,
    R: PlanningRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        section: PlanningSection,
        item_id: Uuid,
    ) -> Result<Planning, PlanningError> {
        let mut plan = active_plan(&self.query, user_id).await?;
        plan.remove_item(section, item_id, Utc::now())
            .map_err(item_error)?;

        self.repository.save(&plan).await.map_err(repository_error)
    }
}
