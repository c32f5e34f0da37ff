pub mod idea_query_postgres;
pub mod idea_repository_postgres;
pub mod sea_orm_entity;

pub use idea_query_postgres::IdeaQueryPostgres;
pub use idea_repository_postgres::IdeaRepositoryPostgres;
