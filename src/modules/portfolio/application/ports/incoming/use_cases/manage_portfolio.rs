use async_trait::async_trait;
use uuid::Uuid;

use super::PortfolioError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::portfolio::application::domain::{Portfolio, PortfolioDetails};

#[async_trait]
pub trait UpdatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        portfolio_id: Uuid,
        details: PortfolioDetails,
    ) -> Result<Portfolio, PortfolioError>;
}

#[async_trait]
pub trait DeletePortfolioUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, portfolio_id: Uuid) -> Result<(), PortfolioError>;
}
