use async_trait::async_trait;

use super::ReviewError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::reviews::application::domain::{Review, ReviewRequest};

#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, request: ReviewRequest) -> Result<Review, ReviewError>;
}
