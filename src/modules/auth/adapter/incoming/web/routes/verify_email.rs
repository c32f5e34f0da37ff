use actix_web::{get, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::incoming::use_cases::VerifyEmailError;
use crate::shared::api::ApiResponse;

/// Verify an email address
///
/// The token is the one delivered in the verification email.
#[utoipa::path(
    get,
    path = "/api/v1/auth/verify-email/{token}",
    tag = "auth",
    params(("token" = String, Path, description = "Verification token")),
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/auth/verify-email/{token}")]
pub async fn verify_email_handler(
    path: web::Path<String>,
    auth: web::Data<AuthUseCases>,
) -> impl Responder {
    match auth.verify_email.execute(path.into_inner()).await {
        Ok(user) => {
            info!(user_id = %user.id, "Email verification completed");
            ApiResponse::success(user)
        }
        Err(VerifyEmailError::InvalidToken) => ApiResponse::bad_request(
            "INVALID_VERIFICATION_TOKEN",
            "Invalid or expired verification token",
        ),
        Err(VerifyEmailError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(error = %e, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}
