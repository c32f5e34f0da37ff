use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{query_error, repository_error};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::reviews::application::domain::{HelpfulCounts, Review};
use crate::modules::reviews::application::ports::incoming::use_cases::{
    MarkReviewHelpfulUseCase, ReviewError, RespondToReviewUseCase,
};
use crate::modules::reviews::application::ports::outgoing::{ReviewQuery, ReviewRepository};
use crate::modules::vendors::application::ports::outgoing::VendorLookup;
use crate::shared::validation::non_blank;

pub struct RespondToReviewService<Q, R, V>
where
    Q: ReviewQuery,
    R: ReviewRepository,
    V: VendorLookup,
{
    query: Q,
    repository: R,
    vendors: V,
}

impl<Q, R, V> RespondToReviewService<Q, R, V>
where
    Q: ReviewQuery,
    R: ReviewRepository,
    V: VendorLookup,
{
    pub fn new(query: Q, repository: R, vendors: V) -> Self {
        Self {
            query,
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<Q, R, V> RespondToReviewUseCase for RespondToReviewService<Q, R, V>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
    V: VendorLookup + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        review_id: Uuid,
        response: String,
    ) -> Result<Review, ReviewError> {
        let response = non_blank(&response)
            .ok_or_else(|| ReviewError::Validation("Response cannot be empty".into()))?;

        let review = self
            .query
            .find_by_id(review_id)
            .await
            .map_err(query_error)?
            .ok_or(ReviewError::NotFound)?;

        let owns_vendor = self
            .vendors
            .find_by_owner(actor.user_id.value())
            .await
            .map_err(query_error)?
            .is_some_and(|vendor| vendor.id == review.vendor_id);
        if !owns_vendor {
            return Err(ReviewError::Forbidden(
                "You can only respond to reviews for your business".into(),
            ));
        }

        let updated = self
            .repository
            .set_vendor_response(review.id, response, Utc::now())
            .await
            .map_err(repository_error)?;

        info!(review_id = %updated.id, vendor_id = %updated.vendor_id, "Vendor responded to review");
        Ok(updated)
    }
}

pub struct MarkReviewHelpfulService<Q, R>
where
    Q: ReviewQuery,
    R: ReviewRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> MarkReviewHelpfulService<Q, R>
where
    Q: ReviewQuery,
    R: ReviewRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> MarkReviewHelpfulUseCase for MarkReviewHelpfulService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, review_id: Uuid, helpful: bool) -> Result<HelpfulCounts, ReviewError> {
        self.query
            .find_by_id(review_id)
            .await
            .map_err(query_error)?
            .filter(|r| r.is_published)
            .ok_or(ReviewError::NotFound)?;

        self.repository
            .record_vote(review_id, helpful)
            .await
            .map_err(repository_error)
    }
}
