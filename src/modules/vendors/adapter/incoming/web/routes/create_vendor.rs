use actix_web::{post, web, Responder};

use super::vendor_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::vendors::application::domain::{Vendor, VendorProfile};
use crate::modules::vendors::application::vendor_use_cases::VendorUseCases;
use crate::shared::api::ApiResponse;

/// Create the caller's vendor profile
///
/// Only accounts with the `vendor` role may create a profile, and only one.
/// New profiles wait for moderation in `pending` status.
#[utoipa::path(
    post,
    path = "/api/v1/vendors",
    tag = "vendors",
    security(("bearer_auth" = [])),
    request_body = VendorProfile,
    responses(
        (status = 201, description = "Vendor profile created", body = inline(SuccessResponse<Vendor>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Caller is not a vendor", body = ErrorResponse),
        (status = 409, description = "Profile already exists", body = ErrorResponse),
    )
)]
#[post("/vendors")]
pub async fn create_vendor_handler(
    user: AuthenticatedUser,
    req: web::Json<VendorProfile>,
    vendors: web::Data<VendorUseCases>,
) -> impl Responder {
    match vendors.create.execute(user.actor(), req.into_inner()).await {
        Ok(vendor) => ApiResponse::created(vendor),
        Err(e) => vendor_error(e),
    }
}
