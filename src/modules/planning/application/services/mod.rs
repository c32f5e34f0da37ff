pub mod manage_planning;
pub mod planning_items;

pub use manage_planning::{
    CreatePlanningService, DeletePlanningService, GetPlanningService, PlanningStatsService,
    UpdatePlanningService,
};
pub use planning_items::{
    AddPlanningItemsService, RemovePlanningItemService, UpdatePlanningItemService,
};

use uuid::Uuid;

use crate::modules::planning::application::domain::{Planning, PlanningItemError};
use crate::modules::planning::application::ports::incoming::use_cases::PlanningError;
use crate::modules::planning::application::ports::outgoing::{
    PlanningQuery, PlanningRepositoryError,
};

fn repository_error(e: PlanningRepositoryError) -> PlanningError {
    match e {
        PlanningRepositoryError::NotFound => PlanningError::NotFound,
        PlanningRepositoryError::AlreadyExists => PlanningError::AlreadyExists,
        PlanningRepositoryError::DatabaseError(msg) => PlanningError::Repository(msg),
    }
}

fn item_error(e: PlanningItemError) -> PlanningError {
    match e {
        PlanningItemError::NotFound => PlanningError::ItemNotFound,
        PlanningItemError::Invalid(msg) => PlanningError::Validation(msg),
    }
}

async fn active_plan<Q>(query: &Q, user_id: Uuid) -> Result<Planning, PlanningError>
where
    Q: PlanningQuery,
{
    query
        .find_by_user(user_id)
        .await
        .map_err(|e| PlanningError::Repository(e.to_string()))?
        .ok_or(PlanningError::NotFound)
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::planning::application::domain::{NewPlanning, Planning};
    use crate::modules::planning::application::ports::outgoing::{
        PlanningQuery, PlanningQueryError, PlanningRepository, PlanningRepositoryError,
    };
    use crate::tests::support::stubs::sample_planning;

    /// Plans with their active flag; at most one active plan per user.
    #[derive(Default)]
    pub struct InMemoryPlans {
        pub rows: Mutex<Vec<(Planning, bool)>>,
    }

    impl InMemoryPlans {
        pub fn with(plans: Vec<Planning>) -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(plans.into_iter().map(|p| (p, true)).collect()),
            })
        }

        pub fn active_for(&self, user_id: Uuid) -> Option<Planning> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|(p, active)| *active && p.user_id == user_id)
                .map(|(p, _)| p.clone())
        }
    }

    #[async_trait]
    impl PlanningQuery for Arc<InMemoryPlans> {
        async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Planning>, PlanningQueryError> {
            Ok(self.active_for(user_id))
        }
    }

    #[async_trait]
    impl PlanningRepository for Arc<InMemoryPlans> {
        async fn create(&self, new: NewPlanning) -> Result<Planning, PlanningRepositoryError> {
            if self.active_for(new.user_id).is_some() {
                return Err(PlanningRepositoryError::AlreadyExists);
            }
            let mut plan = sample_planning(Uuid::new_v4(), new.user_id);
            plan.wedding_date = new.wedding_date;
            plan.venue = new.venue;
            plan.guest_count = new.guest_count;
            plan.budget = new.budget;
            plan.colors = new.colors;
            self.rows.lock().unwrap().push((plan.clone(), true));
            Ok(plan)
        }

        async fn save(&self, plan: &Planning) -> Result<Planning, PlanningRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|(p, active)| *active && p.id == plan.id)
                .ok_or(PlanningRepositoryError::NotFound)?;
            row.0 = plan.clone();
            Ok(plan.clone())
        }

        async fn soft_delete(&self, id: Uuid) -> Result<(), PlanningRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|(p, active)| *active && p.id == id)
                .ok_or(PlanningRepositoryError::NotFound)?;
            row.1 = false;
            Ok(())
        }
    }
}
