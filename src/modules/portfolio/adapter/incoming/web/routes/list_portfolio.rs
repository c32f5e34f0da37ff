use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::portfolio_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::domain::{Portfolio, PortfolioListQuery};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};

/// The caller's own projects
#[utoipa::path(
    get,
    path = "/api/v1/vendors/portfolio",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    params(PortfolioListQuery),
    responses(
        (status = 200, description = "Page of projects", body = inline(SuccessResponse<PageResult<Portfolio>>)),
        (status = 403, description = "Caller is not a vendor", body = ErrorResponse),
        (status = 404, description = "No vendor profile", body = ErrorResponse),
    )
)]
#[get("/vendors/portfolio")]
pub async fn list_my_portfolio_handler(
    user: AuthenticatedUser,
    query: web::Query<PortfolioListQuery>,
    portfolio: web::Data<PortfolioUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match portfolio
        .list_mine
        .execute(user.actor(), query.filter(), query.sort(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => portfolio_error(e),
    }
}

/// A vendor's public showcase, newest first
#[utoipa::path(
    get,
    path = "/api/v1/vendors/{vendor_id}/portfolio",
    tag = "portfolio",
    params(("vendor_id" = Uuid, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<Portfolio>>)),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
#[get("/vendors/{vendor_id}/portfolio")]
pub async fn vendor_portfolio_handler(
    path: web::Path<Uuid>,
    portfolio: web::Data<PortfolioUseCases>,
) -> impl Responder {
    match portfolio.for_vendor.execute(path.into_inner()).await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => portfolio_error(e),
    }
}
