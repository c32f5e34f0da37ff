use actix_web::{delete, put, web, Responder};
use uuid::Uuid;

use super::review_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reviews::application::domain::{Review, ReviewChanges};
use crate::modules::reviews::application::review_use_cases::ReviewUseCases;
use crate::shared::api::{ApiResponse, MessageBody};

/// Edit your review
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review id")),
    request_body = ReviewChanges,
    responses(
        (status = 200, description = "Updated review", body = inline(SuccessResponse<Review>)),
        (status = 400, description = "Invalid rating or empty update", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse),
    )
)]
#[put("/reviews/{id}")]
pub async fn update_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewChanges>,
    reviews: web::Data<ReviewUseCases>,
) -> impl Responder {
    match reviews
        .update
        .execute(user.actor(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(review) => ApiResponse::success(review),
        Err(e) => review_error(e),
    }
}

/// Delete your review
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse),
    )
)]
#[delete("/reviews/{id}")]
pub async fn delete_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    reviews: web::Data<ReviewUseCases>,
) -> impl Responder {
    match reviews.delete.execute(user.actor(), path.into_inner()).await {
        Ok(()) => ApiResponse::message("Review deleted successfully"),
        Err(e) => review_error(e),
    }
}
