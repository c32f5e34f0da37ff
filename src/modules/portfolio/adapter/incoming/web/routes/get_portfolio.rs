use actix_web::{get, post, web, Responder};
use uuid::Uuid;

use super::portfolio_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::domain::{Portfolio, PortfolioLikes};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::shared::api::ApiResponse;

/// Get a project
///
/// Each call counts as one view.
#[utoipa::path(
    get,
    path = "/api/v1/vendors/portfolio/{id}",
    tag = "portfolio",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<Portfolio>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[get("/vendors/portfolio/{id}")]
pub async fn get_portfolio_handler(
    path: web::Path<Uuid>,
    portfolio: web::Data<PortfolioUseCases>,
) -> impl Responder {
    match portfolio.get.execute(path.into_inner()).await {
        Ok(found) => ApiResponse::success(found),
        Err(e) => portfolio_error(e),
    }
}

/// Like a project
#[utoipa::path(
    post,
    path = "/api/v1/vendors/portfolio/{id}/like",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "New like count", body = inline(SuccessResponse<PortfolioLikes>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[post("/vendors/portfolio/{id}/like")]
pub async fn like_portfolio_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    portfolio: web::Data<PortfolioUseCases>,
) -> impl Responder {
    match portfolio.like.execute(path.into_inner()).await {
        Ok(likes) => ApiResponse::success(likes),
        Err(e) => portfolio_error(e),
    }
}
