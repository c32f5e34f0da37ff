use async_trait::async_trait;
use uuid::Uuid;

use super::PortfolioError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::portfolio::application::domain::{
    Portfolio, PortfolioFilter, PortfolioLikes, PortfolioSort,
};
use crate::shared::pagination::{PageRequest, PageResult};

/// The calling vendor's own projects.
#[async_trait]
pub trait ListMyPortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        filter: PortfolioFilter,
        sort: PortfolioSort,
        page: PageRequest,
    ) -> Result<PageResult<Portfolio>, PortfolioError>;
}

/// Public; counts a view.
#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self, portfolio_id: Uuid) -> Result<Portfolio, PortfolioError>;
}

/// Public showcase of one vendor.
#[async_trait]
pub trait VendorPortfolioUseCase: Send + Sync {
    async fn execute(&self, vendor_id: Uuid) -> Result<Vec<Portfolio>, PortfolioError>;
}

#[async_trait]
pub trait LikePortfolioUseCase: Send + Sync {
    async fn execute(&self, portfolio_id: Uuid) -> Result<PortfolioLikes, PortfolioError>;
}
