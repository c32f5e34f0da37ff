use async_trait::async_trait;
use uuid::Uuid;

use super::query_error;
use crate::modules::reviews::application::domain::{
    Review, ReviewFilter, ReviewSort, VendorReviewStats,
};
use crate::modules::reviews::application::ports::incoming::use_cases::{
    GetReviewUseCase, ListReviewsUseCase, ReviewError, VendorReviewStatsUseCase,
};
use crate::modules::reviews::application::ports::outgoing::ReviewQuery;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListReviewsService<Q>
where
    Q: ReviewQuery,
{
    query: Q,
}

impl<Q> ListReviewsService<Q>
where
    Q: ReviewQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListReviewsUseCase for ListReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ReviewFilter,
        sort: ReviewSort,
        page: PageRequest,
    ) -> Result<PageResult<Review>, ReviewError> {
        if let (Some(min), Some(max)) = (filter.min_rating, filter.max_rating) {
            if min > max {
                return Err(ReviewError::Validation(
                    "min_rating cannot be greater than max_rating".into(),
                ));
            }
        }

        self.query
            .list(filter, sort, page)
            .await
            .map_err(query_error)
    }
}

/// Public read: unpublished reviews are reported as missing.
pub struct GetReviewService<Q>
where
    Q: ReviewQuery,
{
    query: Q,
}

impl<Q> GetReviewService<Q>
where
    Q: ReviewQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReviewUseCase for GetReviewService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(&self, review_id: Uuid) -> Result<Review, ReviewError> {
        self.query
            .find_by_id(review_id)
            .await
            .map_err(query_error)?
            .filter(|r| r.is_published)
            .ok_or(ReviewError::NotFound)
    }
}

pub struct VendorReviewStatsService<Q, V>
where
    Q: ReviewQuery,
    V: VendorLookup,
{
    query: Q,
    vendors: V,
}

impl<Q, V> VendorReviewStatsService<Q, V>
where
    Q: ReviewQuery,
    V: VendorLookup,
{
    pub fn new(query: Q, vendors: V) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, V> VendorReviewStatsUseCase for VendorReviewStatsService<Q, V>
where
    Q: ReviewQuery + Send + Sync,
    V: VendorLookup + Send + Sync,
{
    async fn execute(&self, vendor_id: Uuid) -> Result<VendorReviewStats, ReviewError> {
        self.vendors
            .find_active(vendor_id)
            .await
            .map_err(query_error)?
            .ok_or(ReviewError::VendorNotFound)?;

        let reviews = self
            .query
            .published_for_vendor(vendor_id)
            .await
            .map_err(query_error)?;

        Ok(VendorReviewStats::from_reviews(&reviews))
    }
}
