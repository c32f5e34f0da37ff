use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vendors::application::domain::{Vendor, VendorFilter, VendorSort};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VendorQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Reads only ever return active vendors.
#[async_trait]
pub trait VendorQuery: Send + Sync {
    async fn find_by_id(&self, vendor_id: Uuid) -> Result<Option<Vendor>, VendorQueryError>;

    async fn find_by_owner(&self, user_id: Uuid) -> Result<Option<Vendor>, VendorQueryError>;

    async fn list(
        &self,
        filter: VendorFilter,
        sort: VendorSort,
        page: PageRequest,
    ) -> Result<PageResult<Vendor>, VendorQueryError>;

    /// Approved and featured, most recently featured first, then by rating.
    async fn featured(&self, limit: u64) -> Result<Vec<Vendor>, VendorQueryError>;
}
