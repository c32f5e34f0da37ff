pub mod browse_bookings;
pub mod create_booking;
pub mod manage_booking;

pub use browse_bookings::*;
pub use create_booking::*;
pub use manage_booking::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::bookings::application::ports::incoming::use_cases::BookingError;
use crate::shared::api::ApiResponse;

pub(crate) fn booking_error(e: BookingError) -> HttpResponse {
    match e {
        BookingError::NotFound => ApiResponse::not_found("BOOKING_NOT_FOUND", "Booking not found"),
        BookingError::VendorNotFound => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found")
        }
        BookingError::Forbidden(msg) => ApiResponse::forbidden("FORBIDDEN", &msg),
        BookingError::InvalidTransition(msg) => {
            ApiResponse::bad_request("INVALID_STATUS_TRANSITION", &msg)
        }
        BookingError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        BookingError::Repository(msg) => {
            error!(error = %msg, "Booking operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// `/bookings/stats` and `/bookings/upcoming` go before `/bookings/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_booking_handler)
        .service(list_bookings_handler)
        .service(booking_stats_handler)
        .service(upcoming_bookings_handler)
        .service(get_booking_handler)
        .service(update_booking_handler)
        .service(delete_booking_handler);
}
