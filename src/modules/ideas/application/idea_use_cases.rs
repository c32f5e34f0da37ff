use std::sync::Arc;

use crate::modules::ideas::application::ports::incoming::use_cases::{
    CreateIdeaUseCase, DeleteIdeaUseCase, GetIdeaUseCase, LikeIdeaUseCase, ListIdeasUseCase,
    RelatedIdeasUseCase, ShareIdeaUseCase, TrendingIdeasUseCase, UpdateIdeaUseCase,
};

#[derive(Clone)]
pub struct IdeaUseCases {
    pub create: Arc<dyn CreateIdeaUseCase + Send + Sync>,
    pub list: Arc<dyn ListIdeasUseCase + Send + Sync>,
    pub get: Arc<dyn GetIdeaUseCase + Send + Sync>,
    pub trending: Arc<dyn TrendingIdeasUseCase + Send + Sync>,
    pub related: Arc<dyn RelatedIdeasUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateIdeaUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteIdeaUseCase + Send + Sync>,
    pub like: Arc<dyn LikeIdeaUseCase + Send + Sync>,
    pub share: Arc<dyn ShareIdeaUseCase + Send + Sync>,
}
