pub mod entities;
pub mod filter;

pub use entities::*;
pub use filter::{PortfolioFilter, PortfolioListQuery, PortfolioSort, PortfolioSortField};
