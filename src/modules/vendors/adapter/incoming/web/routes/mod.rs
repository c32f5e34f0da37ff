pub mod create_vendor;
pub mod get_vendor;
pub mod list_vendors;
pub mod manage_vendor;

pub use create_vendor::*;
pub use get_vendor::*;
pub use list_vendors::*;
pub use manage_vendor::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::vendors::application::ports::incoming::use_cases::VendorError;
use crate::shared::api::ApiResponse;

pub(crate) fn vendor_error(e: VendorError) -> HttpResponse {
    match e {
        VendorError::NotFound => ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found"),
        VendorError::Forbidden(msg) => ApiResponse::forbidden("FORBIDDEN", &msg),
        VendorError::AlreadyExists => ApiResponse::conflict(
            "VENDOR_ALREADY_EXISTS",
            "User already has a vendor profile",
        ),
        VendorError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        VendorError::Repository(msg) => {
            error!(error = %msg, "Vendor operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Literal paths are registered before `/vendors/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_vendor_handler)
        .service(list_vendors_handler)
        .service(featured_vendors_handler)
        .service(get_my_vendor_handler)
        .service(get_vendor_handler)
        .service(update_vendor_handler)
        .service(delete_vendor_handler);
}
