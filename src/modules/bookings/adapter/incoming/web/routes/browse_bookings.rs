use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::booking_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::bookings::application::booking_use_cases::BookingUseCases;
use crate::modules::bookings::application::domain::{Booking, BookingListQuery, BookingStats};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};

/// List the caller's bookings
///
/// Customers see bookings they made, vendors see bookings of their business
/// and admins see everything.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(BookingListQuery),
    responses(
        (status = 200, description = "Page of bookings", body = inline(SuccessResponse<PageResult<Booking>>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
        (status = 404, description = "Vendor profile missing", body = ErrorResponse),
    )
)]
#[get("/bookings")]
pub async fn list_bookings_handler(
    user: AuthenticatedUser,
    query: web::Query<BookingListQuery>,
    bookings: web::Data<BookingUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match bookings
        .list
        .execute(user.actor(), query.filter(), query.sort(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => booking_error(e),
    }
}

/// Booking counts per status
#[utoipa::path(
    get,
    path = "/api/v1/bookings/stats",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts for the caller's bookings", body = inline(SuccessResponse<BookingStats>)),
    )
)]
#[get("/bookings/stats")]
pub async fn booking_stats_handler(
    user: AuthenticatedUser,
    bookings: web::Data<BookingUseCases>,
) -> impl Responder {
    match bookings.stats.execute(user.actor()).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => booking_error(e),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpcomingQuery {
    /// Defaults to 5.
    pub limit: Option<u64>,
}

/// Upcoming confirmed bookings
#[utoipa::path(
    get,
    path = "/api/v1/bookings/upcoming",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(UpcomingQuery),
    responses(
        (status = 200, description = "Soonest first", body = inline(SuccessResponse<Vec<Booking>>)),
    )
)]
#[get("/bookings/upcoming")]
pub async fn upcoming_bookings_handler(
    user: AuthenticatedUser,
    query: web::Query<UpcomingQuery>,
    bookings: web::Data<BookingUseCases>,
) -> impl Responder {
    match bookings
        .upcoming
        .execute(user.actor(), query.limit.unwrap_or(5))
        .await
    {
        Ok(list) => ApiResponse::success(list),
        Err(e) => booking_error(e),
    }
}

/// Get a booking
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking", body = inline(SuccessResponse<Booking>)),
        (status = 403, description = "Not a party to the booking", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[get("/bookings/{id}")]
pub async fn get_booking_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    bookings: web::Data<BookingUseCases>,
) -> impl Responder {
    match bookings.get.execute(user.actor(), path.into_inner()).await {
        Ok(booking) => ApiResponse::success(booking),
        Err(e) => booking_error(e),
    }
}
