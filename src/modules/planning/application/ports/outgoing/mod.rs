pub mod planning_query;
pub mod planning_repository;

pub use planning_query::{PlanningQuery, PlanningQueryError};
pub use planning_repository::{PlanningRepository, PlanningRepositoryError};
