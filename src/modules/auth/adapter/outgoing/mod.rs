pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod super_admin_repository_postgres;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use super_admin_repository_postgres::SuperAdminRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
