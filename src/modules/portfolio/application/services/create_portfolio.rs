use async_trait::async_trait;
use tracing::info;

use super::{calling_vendor, repository_error};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::portfolio::application::domain::{NewPortfolio, Portfolio, PortfolioDetails};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, PortfolioError,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

pub struct CreatePortfolioService<L, R>
where
    L: VendorLookup,
    R: PortfolioRepository,
{
    lookup: L,
    repository: R,
}

impl<L, R> CreatePortfolioService<L, R>
where
    L: VendorLookup,
    R: PortfolioRepository,
{
    pub fn new(lookup: L, repository: R) -> Self {
        Self { lookup, repository }
    }
}

#[async_trait]
impl<L, R> CreatePortfolioUseCase for CreatePortfolioService<L, R>
where
    L: VendorLookup + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        details: PortfolioDetails,
    ) -> Result<Portfolio, PortfolioError> {
        let vendor = calling_vendor(&self.lookup, actor).await?;

        let new_portfolio =
            NewPortfolio::from_details(vendor.id, details).map_err(PortfolioError::Validation)?;

        let portfolio = self
            .repository
            .create(new_portfolio)
            .await
            .map_err(repository_error)?;

        info!(portfolio_id = %portfolio.id, vendor_id = %vendor.id, "Portfolio project created");
        Ok(portfolio)
    }
}
