use async_trait::async_trait;
use uuid::Uuid;

use super::ReviewError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::reviews::application::domain::{HelpfulCounts, Review};

/// Lets the reviewed vendor answer publicly.
#[async_trait]
pub trait RespondToReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        review_id: Uuid,
        response: String,
    ) -> Result<Review, ReviewError>;
}

#[async_trait]
pub trait MarkReviewHelpfulUseCase: Send + Sync {
    async fn execute(&self, review_id: Uuid, helpful: bool) -> Result<HelpfulCounts, ReviewError>;
}
