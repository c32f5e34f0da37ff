pub mod browse_inquiries;
pub mod create_inquiry;
pub mod manage_inquiry;

pub use browse_inquiries::*;
pub use create_inquiry::*;
pub use manage_inquiry::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::inquiries::application::ports::incoming::use_cases::InquiryError;
use crate::shared::api::ApiResponse;

pub(crate) fn inquiry_error(e: InquiryError) -> HttpResponse {
    match e {
        InquiryError::NotFound => ApiResponse::not_found("INQUIRY_NOT_FOUND", "Inquiry not found"),
        InquiryError::VendorNotFound => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found")
        }
        InquiryError::Forbidden(msg) => ApiResponse::forbidden("FORBIDDEN", &msg),
        InquiryError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        InquiryError::Repository(msg) => {
            error!(error = %msg, "Inquiry operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// `/inquiries/unread-count` and `/inquiries/recent` go before `/inquiries/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_inquiry_handler)
        .service(list_inquiries_handler)
        .service(unread_count_handler)
        .service(recent_inquiries_handler)
        .service(get_inquiry_handler)
        .service(add_inquiry_message_handler)
        .service(mark_inquiry_read_handler)
        .service(update_inquiry_status_handler)
        .service(delete_inquiry_handler);
}
