use actix_web::{post, web, Responder};

use super::portfolio_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::domain::{Portfolio, PortfolioDetails};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::shared::api::ApiResponse;

/// Add a project to the caller's portfolio
///
/// `title` is required. Items are stored in ascending `position` order.
#[utoipa::path(
    post,
    path = "/api/v1/vendors/portfolio",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    request_body = PortfolioDetails,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Caller is not a vendor", body = ErrorResponse),
        (status = 404, description = "No vendor profile", body = ErrorResponse),
    )
)]
#[post("/vendors/portfolio")]
pub async fn create_portfolio_handler(
    user: AuthenticatedUser,
    req: web::Json<PortfolioDetails>,
    portfolio: web::Data<PortfolioUseCases>,
) -> impl Responder {
    match portfolio.create.execute(user.actor(), req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => portfolio_error(e),
    }
}
