use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError,
};
use crate::shared::api::{ApiResponse, MessageBody};

/// Change the current user's password
#[utoipa::path(
    post,
    path = "/api/v1/auth/change-password",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordCommand,
    responses(
        (status = 200, description = "Password changed", body = MessageBody),
        (status = 400, description = "New password rejected", body = ErrorResponse),
        (status = 401, description = "Current password is incorrect", body = ErrorResponse),
    )
)]
#[post("/auth/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordCommand>,
    auth: web::Data<AuthUseCases>,
) -> impl Responder {
    match auth
        .change_password
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message("Password changed successfully"),
        Err(ChangePasswordError::InvalidCredentials) => {
            warn!(user_id = %user.user_id, "Password change with wrong current password");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Current password is incorrect")
        }
        Err(ChangePasswordError::InvalidPassword(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(ChangePasswordError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
