use actix_web::{post, web, Responder};

use super::review_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reviews::application::domain::{Review, ReviewRequest};
use crate::modules::reviews::application::review_use_cases::ReviewUseCases;
use crate::shared::api::ApiResponse;

/// Review a completed booking
///
/// The booking must belong to the caller and to the reviewed vendor. Each
/// booking can be reviewed once. The vendor's rating is recomputed right away.
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review published", body = inline(SuccessResponse<Review>)),
        (status = 400, description = "Invalid rating, duplicate review or booking not eligible", body = ErrorResponse),
        (status = 403, description = "Booking belongs to someone else", body = ErrorResponse),
        (status = 404, description = "Vendor or booking not found", body = ErrorResponse),
    )
)]
#[post("/reviews")]
pub async fn create_review_handler(
    user: AuthenticatedUser,
    req: web::Json<ReviewRequest>,
    reviews: web::Data<ReviewUseCases>,
) -> impl Responder {
    match reviews.create.execute(user.actor(), req.into_inner()).await {
        Ok(review) => ApiResponse::created(review),
        Err(e) => review_error(e),
    }
}
