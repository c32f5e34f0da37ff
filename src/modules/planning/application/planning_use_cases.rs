use std::sync::Arc;

use crate::modules::planning::application::ports::incoming::use_cases::{
    AddPlanningItemsUseCase, CreatePlanningUseCase, DeletePlanningUseCase, GetPlanningUseCase,
    PlanningStatsUseCase, RemovePlanningItemUseCase, UpdatePlanningItemUseCase,
    UpdatePlanningUseCase,
};

#[derive(Clone)]
pub struct PlanningUseCases {
    pub create: Arc<dyn CreatePlanningUseCase + Send + Sync>,
    pub get: Arc<dyn GetPlanningUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePlanningUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePlanningUseCase + Send + Sync>,
    pub stats: Arc<dyn PlanningStatsUseCase + Send + Sync>,
    pub add_items: Arc<dyn AddPlanningItemsUseCase + Send + Sync>,
    pub update_item: Arc<dyn UpdatePlanningItemUseCase + Send + Sync>,
    pub remove_item: Arc<dyn RemovePlanningItemUseCase + Send + Sync>,
}
