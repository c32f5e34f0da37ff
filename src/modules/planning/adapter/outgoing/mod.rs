pub mod planning_query_postgres;
pub mod planning_repository_postgres;
pub mod sea_orm_entity;

pub use planning_query_postgres::PlanningQueryPostgres;
pub use planning_repository_postgres::PlanningRepositoryPostgres;
