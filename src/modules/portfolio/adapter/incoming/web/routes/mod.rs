pub mod create_portfolio;
pub mod get_portfolio;
pub mod list_portfolio;
pub mod manage_portfolio;

pub use create_portfolio::*;
pub use get_portfolio::*;
pub use list_portfolio::*;
pub use manage_portfolio::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::portfolio::application::ports::incoming::use_cases::PortfolioError;
use crate::shared::api::ApiResponse;

pub(crate) fn portfolio_error(e: PortfolioError) -> HttpResponse {
    match e {
        PortfolioError::NotFound => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        PortfolioError::VendorNotFound => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor profile not found")
        }
        PortfolioError::Forbidden(msg) => ApiResponse::forbidden("FORBIDDEN", &msg),
        PortfolioError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        PortfolioError::Repository(msg) => {
            error!(error = %msg, "Portfolio operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Registered ahead of the vendor routes so `/vendors/portfolio` is not read
/// as a vendor id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_portfolio_handler)
        .service(list_my_portfolio_handler)
        .service(get_portfolio_handler)
        .service(update_portfolio_handler)
        .service(delete_portfolio_handler)
        .service(like_portfolio_handler)
        .service(vendor_portfolio_handler);
}
