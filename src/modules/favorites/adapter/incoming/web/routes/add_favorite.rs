use actix_web::{post, web, Responder};

use super::favorite_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::favorites::application::domain::{Favorite, FavoriteRequest};
use crate::modules::favorites::application::favorite_use_cases::FavoriteUseCases;
use crate::shared::api::ApiResponse;

/// Save a vendor to the caller's favorites
#[utoipa::path(
    post,
    path = "/api/v1/users/favorites",
    tag = "favorites",
    security(("bearer_auth" = [])),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Favorite saved", body = inline(SuccessResponse<Favorite>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
        (status = 409, description = "Vendor already in favorites", body = ErrorResponse),
    )
)]
#[post("/users/favorites")]
pub async fn add_favorite_handler(
    user: AuthenticatedUser,
    req: web::Json<FavoriteRequest>,
    favorites: web::Data<FavoriteUseCases>,
) -> impl Responder {
    match favorites.add.execute(user.actor(), req.into_inner()).await {
        Ok(favorite) => ApiResponse::created(favorite),
        Err(e) => favorite_error(e),
    }
}
