use actix_web::{delete, put, web, Responder};
use uuid::Uuid;

use super::booking_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::bookings::application::booking_use_cases::BookingUseCases;
use crate::modules::bookings::application::domain::{Booking, BookingChanges};
use crate::shared::api::{ApiResponse, MessageBody};

/// Update a booking
///
/// Either party may update. Status changes follow
/// `pending → confirmed → in_progress → completed`, and any open booking may be
/// cancelled. Sending `paid_amount` recomputes the payment status and the
/// remaining amount.
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = BookingChanges,
    responses(
        (status = 200, description = "Updated booking", body = inline(SuccessResponse<Booking>)),
        (status = 400, description = "Validation failed or illegal status change", body = ErrorResponse),
        (status = 403, description = "Not a party to the booking", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[put("/bookings/{id}")]
pub async fn update_booking_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<BookingChanges>,
    bookings: web::Data<BookingUseCases>,
) -> impl Responder {
    match bookings
        .update
        .execute(user.actor(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(booking) => ApiResponse::success(booking),
        Err(e) => booking_error(e),
    }
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Not a party to the booking", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[delete("/bookings/{id}")]
pub async fn delete_booking_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    bookings: web::Data<BookingUseCases>,
) -> impl Responder {
    match bookings.delete.execute(user.actor(), path.into_inner()).await {
        Ok(()) => ApiResponse::message("Booking deleted successfully"),
        Err(e) => booking_error(e),
    }
}
