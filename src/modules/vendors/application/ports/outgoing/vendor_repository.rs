use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vendors::application::domain::{NewVendor, Vendor, VendorProfile};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VendorRepositoryError {
    #[error("Vendor not found")]
    NotFound,

    #[error("User already has a vendor profile")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VendorRepository: Send + Sync {
    async fn create(&self, vendor: NewVendor) -> Result<Vendor, VendorRepositoryError>;

    async fn update_profile(
        &self,
        vendor_id: Uuid,
        profile: VendorProfile,
    ) -> Result<Vendor, VendorRepositoryError>;

    async fn soft_delete(&self, vendor_id: Uuid) -> Result<(), VendorRepositoryError>;

    /// Single `view_count = view_count + 1` statement.
    async fn increment_view_count(&self, vendor_id: Uuid) -> Result<(), VendorRepositoryError>;
}
