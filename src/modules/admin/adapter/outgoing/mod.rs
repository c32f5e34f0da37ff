pub mod dashboard_query_postgres;
pub mod moderation_repository_postgres;

pub use dashboard_query_postgres::DashboardQueryPostgres;
pub use moderation_repository_postgres::ModerationRepositoryPostgres;
