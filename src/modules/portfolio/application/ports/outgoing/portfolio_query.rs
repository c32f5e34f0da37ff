use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::{Portfolio, PortfolioFilter, PortfolioSort};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Reads only ever return active projects.
#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn find_by_id(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, PortfolioQueryError>;

    async fn list_for_vendor(
        &self,
        vendor_id: Uuid,
        filter: &PortfolioFilter,
        sort: PortfolioSort,
        page: PageRequest,
    ) -> Result<PageResult<Portfolio>, PortfolioQueryError>;

    /// Every project of the vendor, newest first.
    async fn all_for_vendor(&self, vendor_id: Uuid) -> Result<Vec<Portfolio>, PortfolioQueryError>;
}
