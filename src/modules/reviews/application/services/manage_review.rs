use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{authored_review, repository_error};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::reviews::application::domain::{
    Review, ReviewChanges, ReviewValidationError,
};
use crate::modules::reviews::application::ports::incoming::use_cases::{
    DeleteReviewUseCase, ReviewError, UpdateReviewUseCase,
};
use crate::modules::reviews::application::ports::outgoing::{ReviewQuery, ReviewRepository};

pub struct UpdateReviewService<Q, R>
where
    Q: ReviewQuery,
    R: ReviewRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateReviewService<Q, R>
where
    Q: ReviewQuery,
    R: ReviewRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateReviewUseCase for UpdateReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        review_id: Uuid,
        changes: ReviewChanges,
    ) -> Result<Review, ReviewError> {
        if changes.is_empty() {
            return Err(ReviewError::Validation("No fields to update".into()));
        }

        let mut review = authored_review(&self.query, actor, review_id).await?;
        review.apply(changes, Utc::now()).map_err(|e| match e {
            ReviewValidationError::Rating(msg) => ReviewError::InvalidRating(msg),
            ReviewValidationError::Field(msg) => ReviewError::Validation(msg),
        })?;

        let saved = self
            .repository
            .save(&review)
            .await
            .map_err(repository_error)?;

        info!(review_id = %saved.id, rating = saved.rating, "Review updated");
        Ok(saved)
    }
}

pub struct DeleteReviewService<Q, R>
where
    Q: ReviewQuery,
    R: ReviewRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteReviewService<Q, R>
where
    Q: ReviewQuery,
    R: ReviewRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteReviewUseCase for DeleteReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, review_id: Uuid) -> Result<(), ReviewError> {
        let review = authored_review(&self.query, actor, review_id).await?;

        self.repository
            .soft_delete(&review)
            .await
            .map_err(repository_error)?;

        info!(review_id = %review.id, vendor_id = %review.vendor_id, "Review deleted");
        Ok(())
    }
}
