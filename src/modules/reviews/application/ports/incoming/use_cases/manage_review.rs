use async_trait::async_trait;
use uuid::Uuid;

use super::ReviewError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::reviews::application::domain::{Review, ReviewChanges};

#[async_trait]
pub trait UpdateReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        review_id: Uuid,
        changes: ReviewChanges,
    ) -> Result<Review, ReviewError>;
}

#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, review_id: Uuid) -> Result<(), ReviewError>;
}
