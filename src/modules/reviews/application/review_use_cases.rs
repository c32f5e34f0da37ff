use std::sync::Arc;

use crate::modules::reviews::application::ports::incoming::use_cases::{
    CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase, ListReviewsUseCase,
    MarkReviewHelpfulUseCase, RespondToReviewUseCase, UpdateReviewUseCase,
    VendorReviewStatsUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub create: Arc<dyn CreateReviewUseCase + Send + Sync>,
    pub list: Arc<dyn ListReviewsUseCase + Send + Sync>,
    pub get: Arc<dyn GetReviewUseCase + Send + Sync>,
    pub vendor_stats: Arc<dyn VendorReviewStatsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateReviewUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReviewUseCase + Send + Sync>,
    pub respond: Arc<dyn RespondToReviewUseCase + Send + Sync>,
    pub helpful: Arc<dyn MarkReviewHelpfulUseCase + Send + Sync>,
}
