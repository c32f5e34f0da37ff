use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::vendor_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::vendors::application::domain::Vendor;
use crate::modules::vendors::application::vendor_use_cases::VendorUseCases;
use crate::shared::api::ApiResponse;

/// Vendor details; counts a profile view
#[utoipa::path(
    get,
    path = "/api/v1/vendors/{id}",
    tag = "vendors",
    params(("id" = Uuid, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor", body = inline(SuccessResponse<Vendor>)),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
#[get("/vendors/{id}")]
pub async fn get_vendor_handler(
    path: web::Path<Uuid>,
    vendors: web::Data<VendorUseCases>,
) -> impl Responder {
    match vendors.get.execute(path.into_inner()).await {
        Ok(vendor) => ApiResponse::success(vendor),
        Err(e) => vendor_error(e),
    }
}

/// The caller's own vendor profile
#[utoipa::path(
    get,
    path = "/api/v1/vendors/me",
    tag = "vendors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Vendor", body = inline(SuccessResponse<Vendor>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No vendor profile", body = ErrorResponse),
    )
)]
#[get("/vendors/me")]
pub async fn get_my_vendor_handler(
    user: AuthenticatedUser,
    vendors: web::Data<VendorUseCases>,
) -> impl Responder {
    match vendors.get_mine.execute(user.user_id).await {
        Ok(vendor) => ApiResponse::success(vendor),
        Err(e) => vendor_error(e),
    }
}
