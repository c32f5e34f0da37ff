use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthSession, RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;

/// Register a customer or vendor account
///
/// Returns the new account with access and refresh tokens and sends a verification email.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterUserCommand,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSession>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserCommand>,
    auth: web::Data<AuthUseCases>,
) -> impl Responder {
    let command = req.into_inner();
    info!(email = %command.email, "Registration attempt");

    match auth.register.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, role = %session.user.role, "User registered");
            ApiResponse::created(session)
        }
        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already exists");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already registered")
        }
        Err(RegisterUserError::AdminRoleNotAllowed) => ApiResponse::bad_request(
            "ADMIN_ROLE_NOT_ALLOWED",
            "Admin accounts cannot be self-registered",
        ),
        Err(e @ RegisterUserError::InvalidRole(_)) => {
            ApiResponse::bad_request("INVALID_ROLE", &e.to_string())
        }
        Err(
            e @ (RegisterUserError::InvalidEmail(_)
            | RegisterUserError::InvalidPassword(_)
            | RegisterUserError::InvalidName
            | RegisterUserError::InvalidPhone),
        ) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
