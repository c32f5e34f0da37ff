pub mod browse_portfolio;
pub mod create_portfolio;
pub mod manage_portfolio;

pub use browse_portfolio::{
    GetPortfolioService, LikePortfolioService, ListMyPortfolioService, VendorPortfolioService,
};
pub use create_portfolio::CreatePortfolioService;
pub use manage_portfolio::{DeletePortfolioService, UpdatePortfolioService};

use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Actor, Role};
use crate::modules::portfolio::application::domain::Portfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::PortfolioError;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepositoryError,
};
use crate::modules::vendors::application::domain::VendorRef;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

fn repository_error(e: PortfolioRepositoryError) -> PortfolioError {
    match e {
        PortfolioRepositoryError::NotFound => PortfolioError::NotFound,
        PortfolioRepositoryError::DatabaseError(msg) => PortfolioError::Repository(msg),
    }
}

/// The vendor profile behind a vendor account.
async fn calling_vendor<L>(lookup: &L, actor: Actor) -> Result<VendorRef, PortfolioError>
where
    L: VendorLookup,
{
    if actor.role != Role::Vendor {
        return Err(PortfolioError::Forbidden(
            "Only vendor accounts can manage a portfolio".into(),
        ));
    }

    lookup
        .find_by_owner(actor.user_id.value())
        .await
        .map_err(|e| PortfolioError::Repository(e.to_string()))?
        .ok_or(PortfolioError::VendorNotFound)
}

async fn owned_portfolio<Q, L>(
    query: &Q,
    lookup: &L,
    actor: Actor,
    portfolio_id: Uuid,
    action: &str,
) -> Result<Portfolio, PortfolioError>
where
    Q: PortfolioQuery,
    L: VendorLookup,
{
    let portfolio = query
        .find_by_id(portfolio_id)
        .await
        .map_err(|e| PortfolioError::Repository(e.to_string()))?
        .ok_or(PortfolioError::NotFound)?;

    let vendor = calling_vendor(lookup, actor).await?;
    if portfolio.vendor_id != vendor.id {
        return Err(PortfolioError::Forbidden(format!(
            "You can only {action} your own portfolio"
        )));
    }
    Ok(portfolio)
}
