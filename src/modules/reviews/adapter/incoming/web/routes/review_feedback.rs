use actix_web::{post, web, Responder};
use uuid::Uuid;

use super::review_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reviews::application::domain::{
    HelpfulCounts, HelpfulVote, Review, VendorResponseRequest,
};
use crate::modules::reviews::application::review_use_cases::ReviewUseCases;
use crate::shared::api::ApiResponse;

/// Respond to a review of your business
#[utoipa::path(
    post,
    path = "/api/v1/reviews/{id}/response",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review id")),
    request_body = VendorResponseRequest,
    responses(
        (status = 200, description = "Review with the vendor response", body = inline(SuccessResponse<Review>)),
        (status = 400, description = "Empty response", body = ErrorResponse),
        (status = 403, description = "Review is about another vendor", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse),
    )
)]
#[post("/reviews/{id}/response")]
pub async fn respond_to_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<VendorResponseRequest>,
    reviews: web::Data<ReviewUseCases>,
) -> impl Responder {
    match reviews
        .respond
        .execute(user.actor(), path.into_inner(), req.into_inner().response)
        .await
    {
        Ok(review) => ApiResponse::success(review),
        Err(e) => review_error(e),
    }
}

/// Vote on whether a review was helpful
///
/// Anonymous votes are accepted and nothing stops repeat voting.
#[utoipa::path(
    post,
    path = "/api/v1/reviews/{id}/helpful",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review id")),
    request_body = HelpfulVote,
    responses(
        (status = 200, description = "Current vote counters", body = inline(SuccessResponse<HelpfulCounts>)),
        (status = 404, description = "Review not found", body = ErrorResponse),
    )
)]
#[post("/reviews/{id}/helpful")]
pub async fn mark_review_helpful_handler(
    path: web::Path<Uuid>,
    req: web::Json<HelpfulVote>,
    reviews: web::Data<ReviewUseCases>,
) -> impl Responder {
    match reviews
        .helpful
        .execute(path.into_inner(), req.is_helpful)
        .await
    {
        Ok(counts) => ApiResponse::success(counts),
        Err(e) => review_error(e),
    }
}
