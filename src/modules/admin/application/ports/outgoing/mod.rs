pub mod dashboard_query;
pub mod moderation_repository;

pub use dashboard_query::{DashboardQuery, DashboardQueryError};
pub use moderation_repository::{ModerationRepository, ModerationRepositoryError};
