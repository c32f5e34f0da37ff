use actix_web::{delete, put, web, Responder};
use uuid::Uuid;

use super::vendor_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::vendors::application::domain::{Vendor, VendorProfile};
use crate::modules::vendors::application::vendor_use_cases::VendorUseCases;
use crate::shared::api::{ApiResponse, MessageBody};

/// Update a vendor profile (owner only)
///
/// Status, verification, featuring and the aggregate counters are managed by
/// the platform and cannot be set here.
#[utoipa::path(
    put,
    path = "/api/v1/vendors/{id}",
    tag = "vendors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vendor id")),
    request_body = VendorProfile,
    responses(
        (status = 200, description = "Updated vendor", body = inline(SuccessResponse<Vendor>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
#[put("/vendors/{id}")]
pub async fn update_vendor_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<VendorProfile>,
    vendors: web::Data<VendorUseCases>,
) -> impl Responder {
    match vendors
        .update
        .execute(user.actor(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(vendor) => ApiResponse::success(vendor),
        Err(e) => vendor_error(e),
    }
}

/// Deactivate a vendor profile (owner only)
#[utoipa::path(
    delete,
    path = "/api/v1/vendors/{id}",
    tag = "vendors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
#[delete("/vendors/{id}")]
pub async fn delete_vendor_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    vendors: web::Data<VendorUseCases>,
) -> impl Responder {
    match vendors.delete.execute(user.actor(), path.into_inner()).await {
        Ok(()) => ApiResponse::message("Vendor deleted successfully"),
        Err(e) => vendor_error(e),
    }
}
