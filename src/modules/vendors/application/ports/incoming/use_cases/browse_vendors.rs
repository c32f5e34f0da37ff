use async_trait::async_trait;
use uuid::Uuid;

use super::VendorError;
use crate::modules::vendors::application::domain::{Vendor, VendorFilter, VendorSort};
use crate::shared::pagination::{PageRequest, PageResult};

#[async_trait]
pub trait ListVendorsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: VendorFilter,
        sort: VendorSort,
        page: PageRequest,
    ) -> Result<PageResult<Vendor>, VendorError>;
}

/// Public profile view; counts the visit.
#[async_trait]
pub trait GetVendorUseCase: Send + Sync {
    async fn execute(&self, vendor_id: Uuid) -> Result<Vendor, VendorError>;
}

#[async_trait]
pub trait GetMyVendorUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vendor, VendorError>;
}

#[async_trait]
pub trait FeaturedVendorsUseCase: Send + Sync {
    async fn execute(&self, limit: u64) -> Result<Vec<Vendor>, VendorError>;
}
