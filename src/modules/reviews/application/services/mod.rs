pub mod browse_reviews;
pub mod create_review;
pub mod manage_review;
pub mod review_feedback;

pub use browse_reviews::{GetReviewService, ListReviewsService, VendorReviewStatsService};
pub use create_review::CreateReviewService;
pub use manage_review::{DeleteReviewService, UpdateReviewService};
pub use review_feedback::{MarkReviewHelpfulService, RespondToReviewService};

use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::reviews::application::domain::Review;
use crate::modules::reviews::application::ports::incoming::use_cases::ReviewError;
use crate::modules::reviews::application::ports::outgoing::{ReviewQuery, ReviewRepositoryError};

fn repository_error(e: ReviewRepositoryError) -> ReviewError {
    match e {
        ReviewRepositoryError::NotFound => ReviewError::NotFound,
        ReviewRepositoryError::AlreadyExists => ReviewError::AlreadyExists,
        ReviewRepositoryError::DatabaseError(msg) => ReviewError::Repository(msg),
    }
}

fn query_error(e: impl ToString) -> ReviewError {
    ReviewError::Repository(e.to_string())
}

/// The active review, provided the caller wrote it.
async fn authored_review<Q: ReviewQuery>(
    query: &Q,
    actor: Actor,
    review_id: Uuid,
) -> Result<Review, ReviewError> {
    let review = query
        .find_by_id(review_id)
        .await
        .map_err(query_error)?
        .ok_or(ReviewError::NotFound)?;

    if review.customer_id != actor.user_id.value() {
        return Err(ReviewError::Forbidden(
            "You can only modify your own reviews".into(),
        ));
    }
    Ok(review)
}
