use async_trait::async_trait;
use uuid::Uuid;

use super::ReviewError;
use crate::modules::reviews::application::domain::{
    Review, ReviewFilter, ReviewSort, VendorReviewStats,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[async_trait]
pub trait ListReviewsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ReviewFilter,
        sort: ReviewSort,
        page: PageRequest,
    ) -> Result<PageResult<Review>, ReviewError>;
}

#[async_trait]
pub trait GetReviewUseCase: Send + Sync {
    async fn execute(&self, review_id: Uuid) -> Result<Review, ReviewError>;
}

#[async_trait]
pub trait VendorReviewStatsUseCase: Send + Sync {
    async fn execute(&self, vendor_id: Uuid) -> Result<VendorReviewStats, ReviewError>;
}
