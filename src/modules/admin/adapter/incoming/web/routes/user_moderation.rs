use actix_web::{get, put, web, Responder};
use uuid::Uuid;

use super::admin_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::domain::{AdminUserListQuery, UserStatusChange};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::User;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};

/// User directory
///
/// Lists customers, vendors and admins, deactivated accounts included.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(AdminUserListQuery),
    responses(
        (status = 200, description = "Page of users", body = inline(SuccessResponse<PageResult<User>>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/admin/users")]
pub async fn list_users_handler(
    _admin: AdminUser,
    query: web::Query<AdminUserListQuery>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match admin
        .list_users
        .execute(query.filter(), query.sort(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => admin_error(e),
    }
}

/// Activate or deactivate a user account
///
/// Deactivated users can no longer log in or refresh tokens.
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UserStatusChange,
    responses(
        (status = 200, description = "Updated user", body = inline(SuccessResponse<User>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[put("/admin/users/{id}/status")]
pub async fn update_user_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UserStatusChange>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    match admin
        .update_user_status
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(user) => ApiResponse::success(user),
        Err(e) => admin_error(e),
    }
}
