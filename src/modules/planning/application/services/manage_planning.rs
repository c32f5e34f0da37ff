use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{active_plan, repository_error};
use crate::modules::planning::application::domain::{
    NewPlanning, Planning, PlanningChanges, PlanningRequest, PlanningStats,
};
use crate::modules::planning::application::ports::incoming::use_cases::{
    CreatePlanningUseCase, DeletePlanningUseCase, GetPlanningUseCase, PlanningError,
    PlanningStatsUseCase, UpdatePlanningUseCase,
};
use crate::modules::planning::application::ports::outgoing::{PlanningQuery, PlanningRepository};

pub struct CreatePlanningService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreatePlanningService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreatePlanningUseCase for CreatePlanningService<Q, R>
where
    Q: PlanningQuery + Send + Sync,
    R: PlanningRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        request: PlanningRequest,
    ) -> Result<Planning, PlanningError> {
        let existing = self
            .query
            .find_by_user(user_id)
            .await
            .map_err(|e| PlanningError::Repository(e.to_string()))?;
        if existing.is_some() {
            return Err(PlanningError::AlreadyExists);
        }

        let new_plan =
            NewPlanning::from_request(user_id, request).map_err(PlanningError::Validation)?;

        // The partial unique index still rejects a concurrent second create.
        let plan = self
            .repository
            .create(new_plan)
            .await
            .map_err(repository_error)?;

        info!(planning_id = %plan.id, user_id = %user_id, "Planning document created");
        Ok(plan)
    }
}

pub struct GetPlanningService<Q>
where
    Q: PlanningQuery,
{
    query: Q,
}

impl<Q> GetPlanningService<Q>
where
    Q: PlanningQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPlanningUseCase for GetPlanningService<Q>
where
    Q: PlanningQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Planning, PlanningError> {
        active_plan(&self.query, user_id).await
    }
}

pub struct UpdatePlanningService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdatePlanningService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdatePlanningUseCase for UpdatePlanningService<Q, R>
where
    Q: PlanningQuery + Send + Sync,
    R: PlanningRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        changes: PlanningChanges,
    ) -> Result<Planning, PlanningError> {
        if changes.is_empty() {
            return Err(PlanningError::Validation("No fields to update".into()));
        }

        let mut plan = active_plan(&self.query, user_id).await?;
        plan.apply(changes, Utc::now())
            .map_err(PlanningError::Validation)?;

        self.repository.save(&plan).await.map_err(repository_error)
    }
}

pub struct DeletePlanningService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeletePlanningService<Q, R>
where
    Q: PlanningQuery,
    R: PlanningRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeletePlanningUseCase for DeletePlanningService<Q, R>
where
    Q: PlanningQuery + Send + Sync,
    R: PlanningRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), PlanningError> {
        let plan = active_plan(&self.query, user_id).await?;

        self.repository
            .soft_delete(plan.id)
            .await
            .map_err(repository_error)?;

        info!(planning_id = %plan.id, user_id = %user_id, "Planning document deleted");
        Ok(())
    }
}

pub struct PlanningStatsService<Q>
where
    Q: PlanningQuery,
{
    query: Q,
}

impl<Q> PlanningStatsService<Q>
where
    Q: PlanningQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> PlanningStatsUseCase for PlanningStatsService<Q>
where
    Q: PlanningQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<PlanningStats, PlanningError> {
        let plan = active_plan(&self.query, user_id).await?;
        Ok(PlanningStats::from_planning(&plan, Utc::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::planning::application::services::test_support::InMemoryPlans;
    use crate::tests::support::stubs::sample_planning;

    fn request() -> PlanningRequest {
        serde_json::from_value(serde_json::json!({
            "wedding_date": "2026-12-05",
            "guest_count": 200
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_starts_with_zero_progress() {
        let store = InMemoryPlans::with(vec![]);
        let user_id = Uuid::new_v4();

        let plan = CreatePlanningService::new(store.clone(), store.clone())
            .execute(user_id, request())
            .await
            .unwrap();

        assert_eq!(plan.user_id, user_id);
        assert_eq!(plan.guest_count, Some(200));
        assert_eq!(plan.progress.overall(), 0);
    }

    #[tokio::test]
    async fn second_plan_is_rejected() {
        let user_id = Uuid::new_v4();
        let store = InMemoryPlans::with(vec![sample_planning(Uuid::new_v4(), user_id)]);

        assert_eq!(
            CreatePlanningService::new(store.clone(), store)
                .execute(user_id, request())
                .await
                .unwrap_err(),
            PlanningError::AlreadyExists
        );
    }

    #[tokio::test]
    async fn deleted_plan_can_be_recreated() {
        let user_id = Uuid::new_v4();
        let store = InMemoryPlans::with(vec![sample_planning(Uuid::new_v4(), user_id)]);

        DeletePlanningService::new(store.clone(), store.clone())
            .execute(user_id)
            .await
            .unwrap();
        assert_eq!(
            GetPlanningService::new(store.clone())
                .execute(user_id)
                .await
                .unwrap_err(),
            PlanningError::NotFound
        );

        assert!(CreatePlanningService::new(store.clone(), store)
            .execute(user_id, request())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn update_requires_a_change() {
        let user_id = Uuid::new_v4();
        let store = InMemoryPlans::with(vec![sample_planning(Uuid::new_v4(), user_id)]);
        let service = UpdatePlanningService::new(store.clone(), store.clone());

        assert!(matches!(
            service.execute(user_id, PlanningChanges::default()).await,
            Err(PlanningError::Validation(_))
        ));

        let plan = service
            .execute(
                user_id,
                PlanningChanges {
                    venue: Some("Kandy".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(plan.venue.as_deref(), Some("Kandy"));
        assert_eq!(store.active_for(user_id).unwrap().venue.as_deref(), Some("Kandy"));
    }

    #[tokio::test]
    async fn stats_without_plan_is_not_found() {
        assert_eq!(
            PlanningStatsService::new(InMemoryPlans::with(vec![]))
                .execute(Uuid::new_v4())
                .await
                .unwrap_err(),
            PlanningError::NotFound
        );
    }
}
