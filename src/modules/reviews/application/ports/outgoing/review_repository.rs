use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::reviews::application::domain::{HelpfulCounts, NewReview, Review};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Review not found")]
    NotFound,

    #[error("Review already exists for this booking")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every write that changes which ratings count recomputes the vendor's
/// `rating` and `review_count` in the same transaction.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: NewReview) -> Result<Review, ReviewRepositoryError>;

    async fn save(&self, review: &Review) -> Result<Review, ReviewRepositoryError>;

    async fn soft_delete(&self, review: &Review) -> Result<(), ReviewRepositoryError>;

    async fn set_vendor_response(
        &self,
        review_id: Uuid,
        response: String,
        at: DateTime<Utc>,
    ) -> Result<Review, ReviewRepositoryError>;

    async fn record_vote(
        &self,
        review_id: Uuid,
        helpful: bool,
    ) -> Result<HelpfulCounts, ReviewRepositoryError>;
}
