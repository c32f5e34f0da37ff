use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::{NewPortfolio, Portfolio, PortfolioDetails};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn create(&self, portfolio: NewPortfolio) -> Result<Portfolio, PortfolioRepositoryError>;

    async fn update(
        &self,
        portfolio_id: Uuid,
        details: PortfolioDetails,
    ) -> Result<Portfolio, PortfolioRepositoryError>;

    async fn soft_delete(&self, portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError>;

    /// Single `view_count = view_count + 1` statement.
    async fn increment_view_count(&self, portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError>;

    /// Returns the new like count; `NotFound` for missing or deleted projects.
    async fn increment_like_count(&self, portfolio_id: Uuid) -> Result<i32, PortfolioRepositoryError>;
}
