use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use super::login_user::LoginRequestDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::incoming::use_cases::{
    SuperAdminLoginError, SuperAdminSession,
};
use crate::shared::api::ApiResponse;

/// Super admin login
#[utoipa::path(
    post,
    path = "/api/v1/auth/super-admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<SuperAdminSession>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account disabled", body = ErrorResponse),
    )
)]
#[post("/auth/super-admin/login")]
pub async fn super_admin_login_handler(
    req: web::Json<LoginRequestDto>,
    auth: web::Data<AuthUseCases>,
) -> impl Responder {
    let dto = req.into_inner();

    match auth.super_admin_login.execute(dto.email, dto.password).await {
        Ok(session) => {
            info!(admin_id = %session.admin.id, "Super admin session issued");
            ApiResponse::success(session)
        }
        Err(SuperAdminLoginError::InvalidCredentials) => {
            warn!("Super admin login failed");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(SuperAdminLoginError::AccountDisabled) => {
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account has been disabled")
        }
        Err(e) => {
            error!(error = %e, "Super admin login failed");
            ApiResponse::internal_error()
        }
    }
}
