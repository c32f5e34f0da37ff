use actix_web::{get, put, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::domain::entities::{ProfileUpdate, User};
use crate::modules::auth::application::ports::incoming::use_cases::ProfileError;
use crate::shared::api::ApiResponse;

fn profile_error(e: ProfileError) -> HttpResponse {
    match e {
        ProfileError::NotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        ProfileError::InvalidField(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        ProfileError::Repository(msg) => {
            error!(error = %msg, "Profile operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/v1/auth/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<User>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/auth/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    auth: web::Data<AuthUseCases>,
) -> impl Responder {
    match auth.get_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error(e),
    }
}

/// Update the current user's profile
#[utoipa::path(
    put,
    path = "/api/v1/auth/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[put("/auth/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<ProfileUpdate>,
    auth: web::Data<AuthUseCases>,
) -> impl Responder {
    let update = req.into_inner();
    if update.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "No fields to update");
    }

    match auth.update_profile.execute(user.user_id, update).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error(e),
    }
}
