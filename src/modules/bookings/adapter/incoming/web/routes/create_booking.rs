use actix_web::{post, web, Responder};

use super::booking_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::bookings::application::booking_use_cases::BookingUseCases;
use crate::modules::bookings::application::domain::{Booking, BookingRequest};
use crate::shared::api::ApiResponse;

/// Book a vendor
///
/// The caller becomes the booking's customer. The booking starts `pending`
/// with nothing paid.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking created", body = inline(SuccessResponse<Booking>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
#[post("/bookings")]
pub async fn create_booking_handler(
    user: AuthenticatedUser,
    req: web::Json<BookingRequest>,
    bookings: web::Data<BookingUseCases>,
) -> impl Responder {
    match bookings.create.execute(user.actor(), req.into_inner()).await {
        Ok(booking) => ApiResponse::created(booking),
        Err(e) => booking_error(e),
    }
}
