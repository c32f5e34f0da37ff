pub mod browse_portfolio;
pub mod create_portfolio;
pub mod manage_portfolio;

pub use browse_portfolio::{
    GetPortfolioUseCase, LikePortfolioUseCase, ListMyPortfolioUseCase, VendorPortfolioUseCase,
};
pub use create_portfolio::CreatePortfolioUseCase;
pub use manage_portfolio::{DeletePortfolioUseCase, UpdatePortfolioUseCase};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Vendor profile not found")]
    VendorNotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
