use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::{owned_portfolio, repository_error};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::portfolio::application::domain::{Portfolio, PortfolioDetails};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioUseCase, PortfolioError, UpdatePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository,
};
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

pub struct UpdatePortfolioService<L, Q, R>
where
    L: VendorLookup,
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    lookup: L,
    query: Q,
    repository: R,
}

impl<L, Q, R> UpdatePortfolioService<L, Q, R>
where
    L: VendorLookup,
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(lookup: L, query: Q, repository: R) -> Self {
        Self {
            lookup,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<L, Q, R> UpdatePortfolioUseCase for UpdatePortfolioService<L, Q, R>
where
    L: VendorLookup + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        portfolio_id: Uuid,
        details: PortfolioDetails,
    ) -> Result<Portfolio, PortfolioError> {
        if details.is_empty() {
            return Err(PortfolioError::Validation("No fields to update".into()));
        }
        details.validate().map_err(PortfolioError::Validation)?;

        owned_portfolio(&self.query, &self.lookup, actor, portfolio_id, "update").await?;

        let portfolio = self
            .repository
            .update(portfolio_id, details.normalized())
            .await
            .map_err(repository_error)?;

        info!(portfolio_id = %portfolio_id, "Portfolio project updated");
        Ok(portfolio)
    }
}

pub struct DeletePortfolioService<L, Q, R>
where
    L: VendorLookup,
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    lookup: L,
    query: Q,
    repository: R,
}

impl<L, Q, R> DeletePortfolioService<L, Q, R>
where
    L: VendorLookup,
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(lookup: L, query: Q, repository: R) -> Self {
        Self {
            lookup,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<L, Q, R> DeletePortfolioUseCase for DeletePortfolioService<L, Q, R>
where
    L: VendorLookup + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, portfolio_id: Uuid) -> Result<(), PortfolioError> {
        owned_portfolio(&self.query, &self.lookup, actor, portfolio_id, "delete").await?;

        self.repository
            .soft_delete(portfolio_id)
            .await
            .map_err(repository_error)?;

        info!(portfolio_id = %portfolio_id, "Portfolio project removed");
        Ok(())
    }
}
