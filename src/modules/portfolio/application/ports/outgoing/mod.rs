pub mod portfolio_query;
pub mod portfolio_repository;

pub use portfolio_query::{PortfolioQuery, PortfolioQueryError};
pub use portfolio_repository::{PortfolioRepository, PortfolioRepositoryError};
