pub mod manage_planning;
pub mod planning_items;

pub use manage_planning::{
    CreatePlanningUseCase, DeletePlanningUseCase, GetPlanningUseCase, PlanningStatsUseCase,
    UpdatePlanningUseCase,
};
pub use planning_items::{AddPlanningItemsUseCase, RemovePlanningItemUseCase, UpdatePlanningItemUseCase};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanningError {
    #[error("Planning document not found")]
    NotFound,

    #[error("Planning document already exists for this user")]
    AlreadyExists,

    #[error("Item not found")]
    ItemNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
