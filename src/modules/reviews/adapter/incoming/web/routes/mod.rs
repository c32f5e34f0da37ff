pub mod browse_reviews;
pub mod create_review;
pub mod manage_review;
pub mod review_feedback;

pub use browse_reviews::*;
pub use create_review::*;
pub use manage_review::*;
pub use review_feedback::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::reviews::application::ports::incoming::use_cases::ReviewError;
use crate::shared::api::ApiResponse;

pub(crate) fn review_error(e: ReviewError) -> HttpResponse {
    match e {
        ReviewError::NotFound => ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found"),
        ReviewError::VendorNotFound => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found")
        }
        ReviewError::BookingNotFound => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Booking not found")
        }
        ReviewError::Forbidden(msg) => ApiResponse::forbidden("FORBIDDEN", &msg),
        ReviewError::BookingVendorMismatch => {
            ApiResponse::bad_request("BOOKING_VENDOR_MISMATCH", &e.to_string())
        }
        ReviewError::BookingNotCompleted => {
            ApiResponse::bad_request("BOOKING_NOT_COMPLETED", &e.to_string())
        }
        ReviewError::AlreadyExists => {
            ApiResponse::bad_request("REVIEW_ALREADY_EXISTS", &e.to_string())
        }
        ReviewError::InvalidRating(msg) => ApiResponse::bad_request("INVALID_RATING", &msg),
        ReviewError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        ReviewError::Repository(msg) => {
            error!(error = %msg, "Review operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// `/reviews/vendor/{vendor_id}/stats` goes before `/reviews/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_review_handler)
        .service(list_reviews_handler)
        .service(vendor_review_stats_handler)
        .service(get_review_handler)
        .service(update_review_handler)
        .service(delete_review_handler)
        .service(respond_to_review_handler)
        .service(mark_review_helpful_handler);
}
