use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use super::{calling_vendor, repository_error};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::portfolio::application::domain::{
    Portfolio, PortfolioFilter, PortfolioLikes, PortfolioSort,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, LikePortfolioUseCase, ListMyPortfolioUseCase, PortfolioError,
    VendorPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository,
};
use crate::modules::vendors::application::ports::outgoing::VendorLookup;
use crate::shared::pagination::{PageRequest, PageResult};

fn query_error(e: impl ToString) -> PortfolioError {
    PortfolioError::Repository(e.to_string())
}

// ============================================================================
// Own listing
// ============================================================================

pub struct ListMyPortfolioService<L, Q>
where
    L: VendorLookup,
    Q: PortfolioQuery,
{
    lookup: L,
    query: Q,
}

impl<L, Q> ListMyPortfolioService<L, Q>
where
    L: VendorLookup,
    Q: PortfolioQuery,
{
    pub fn new(lookup: L, query: Q) -> Self {
        Self { lookup, query }
    }
}

#[async_trait]
impl<L, Q> ListMyPortfolioUseCase for ListMyPortfolioService<L, Q>
where
    L: VendorLookup + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        filter: PortfolioFilter,
        sort: PortfolioSort,
        page: PageRequest,
    ) -> Result<PageResult<Portfolio>, PortfolioError> {
        let vendor = calling_vendor(&self.lookup, actor).await?;

        self.query
            .list_for_vendor(vendor.id, &filter, sort, page)
            .await
            .map_err(query_error)
    }
}

// ============================================================================
// Get (public)
// ============================================================================

pub struct GetPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> GetPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> GetPortfolioUseCase for GetPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, portfolio_id: Uuid) -> Result<Portfolio, PortfolioError> {
        let mut portfolio = self
            .query
            .find_by_id(portfolio_id)
            .await
            .map_err(query_error)?
            .ok_or(PortfolioError::NotFound)?;

        match self.repository.increment_view_count(portfolio_id).await {
            Ok(()) => portfolio.view_count += 1,
            Err(e) => {
                warn!(portfolio_id = %portfolio_id, error = %e, "Failed to count portfolio view")
            }
        }

        Ok(portfolio)
    }
}

// ============================================================================
// Vendor showcase (public)
// ============================================================================

pub struct VendorPortfolioService<L, Q>
where
    L: VendorLookup,
    Q: PortfolioQuery,
{
    lookup: L,
    query: Q,
}

impl<L, Q> VendorPortfolioService<L, Q>
where
    L: VendorLookup,
    Q: PortfolioQuery,
{
    pub fn new(lookup: L, query: Q) -> Self {
        Self { lookup, query }
    }
}

#[async_trait]
impl<L, Q> VendorPortfolioUseCase for VendorPortfolioService<L, Q>
where
    L: VendorLookup + Send + Sync,
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, vendor_id: Uuid) -> Result<Vec<Portfolio>, PortfolioError> {
        self.lookup
            .find_active(vendor_id)
            .await
            .map_err(query_error)?
            .ok_or(PortfolioError::VendorNotFound)?;

        self.query
            .all_for_vendor(vendor_id)
            .await
            .map_err(query_error)
    }
}

// ============================================================================
// Like
// ============================================================================

pub struct LikePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> LikePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> LikePortfolioUseCase for LikePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, portfolio_id: Uuid) -> Result<PortfolioLikes, PortfolioError> {
        let like_count = self
            .repository
            .increment_like_count(portfolio_id)
            .await
            .map_err(repository_error)?;

        Ok(PortfolioLikes {
            portfolio_id,
            like_count,
        })
    }
}
