use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SuperAdmin;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SuperAdminRepositoryError {
    #[error("Super admin already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SuperAdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str)
        -> Result<Option<SuperAdmin>, SuperAdminRepositoryError>;

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
    ) -> Result<SuperAdmin, SuperAdminRepositoryError>;

    async fn record_login(&self, id: Uuid) -> Result<(), SuperAdminRepositoryError>;
}
