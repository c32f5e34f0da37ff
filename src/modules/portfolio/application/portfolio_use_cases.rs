use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, DeletePortfolioUseCase, GetPortfolioUseCase, LikePortfolioUseCase,
    ListMyPortfolioUseCase, UpdatePortfolioUseCase, VendorPortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub create: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    pub list_mine: Arc<dyn ListMyPortfolioUseCase + Send + Sync>,
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub for_vendor: Arc<dyn VendorPortfolioUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePortfolioUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
    pub like: Arc<dyn LikePortfolioUseCase + Send + Sync>,
}
