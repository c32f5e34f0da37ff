use async_trait::async_trait;
use uuid::Uuid;

use super::AdminError;
use crate::modules::admin::application::domain::VendorStatusChange;
use crate::modules::vendors::application::domain::{Vendor, VendorFilter, VendorSort};
use crate::shared::pagination::{PageRequest, PageResult};

#[async_trait]
pub trait ListVendorsForReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: VendorFilter,
        sort: VendorSort,
        page: PageRequest,
    ) -> Result<PageResult<Vendor>, AdminError>;
}

#[async_trait]
pub trait UpdateVendorStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        admin_id: Uuid,
        vendor_id: Uuid,
        change: VendorStatusChange,
    ) -> Result<Vendor, AdminError>;
}
