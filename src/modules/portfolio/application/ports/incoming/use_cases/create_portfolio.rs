use async_trait::async_trait;

use super::PortfolioError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::portfolio::application::domain::{Portfolio, PortfolioDetails};

#[async_trait]
pub trait CreatePortfolioUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, details: PortfolioDetails) -> Result<Portfolio, PortfolioError>;
}
