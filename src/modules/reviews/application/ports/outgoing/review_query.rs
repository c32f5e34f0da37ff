use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::reviews::application::domain::{Review, ReviewFilter, ReviewSort};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Active review, published or not.
    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, ReviewQueryError>;

    async fn list(
        &self,
        filter: ReviewFilter,
        sort: ReviewSort,
        page: PageRequest,
    ) -> Result<PageResult<Review>, ReviewQueryError>;

    /// Every active, published review of the vendor.
    async fn published_for_vendor(&self, vendor_id: Uuid) -> Result<Vec<Review>, ReviewQueryError>;

    /// Whether the customer has an active review of this booking of the vendor.
    async fn exists_for(
        &self,
        customer_id: Uuid,
        vendor_id: Uuid,
        booking_id: Uuid,
    ) -> Result<bool, ReviewQueryError>;
}
