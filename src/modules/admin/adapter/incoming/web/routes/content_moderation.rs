use actix_web::{get, post, put, web, Responder};
use uuid::Uuid;

use super::admin_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::domain::{
    AdminContentListQuery, ContentStatusChange, FeaturedChange,
};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::ideas::application::domain::Idea;
use crate::shared::api::{ApiResponse, MessageBody};
use crate::shared::pagination::{PageRequest, PageResult};

/// All ideas, drafts included
///
/// Filter by `is_published` to see only drafts or only published ideas.
#[utoipa::path(
    get,
    path = "/api/v1/admin/content",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(AdminContentListQuery),
    responses(
        (status = 200, description = "Page of ideas", body = inline(SuccessResponse<PageResult<Idea>>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/admin/content")]
pub async fn list_content_handler(
    _admin: AdminUser,
    query: web::Query<AdminContentListQuery>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match admin
        .list_content
        .execute(query.filter(), query.sort(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => admin_error(e),
    }
}

/// Publish or unpublish an idea
#[utoipa::path(
    put,
    path = "/api/v1/admin/ideas/{id}/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Idea id")),
    request_body = ContentStatusChange,
    responses(
        (status = 200, description = "Updated idea", body = inline(SuccessResponse<Idea>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Idea not found", body = ErrorResponse),
    )
)]
#[put("/admin/ideas/{id}/status")]
pub async fn update_content_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ContentStatusChange>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    match admin
        .update_content_status
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(idea) => ApiResponse::success(idea),
        Err(e) => admin_error(e),
    }
}

/// Feature or unfeature a vendor or an idea
#[utoipa::path(
    post,
    path = "/api/v1/admin/featured",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = FeaturedChange,
    responses(
        (status = 200, description = "Featured flag updated", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Vendor or idea not found", body = ErrorResponse),
    )
)]
#[post("/admin/featured")]
pub async fn set_featured_handler(
    _admin: AdminUser,
    req: web::Json<FeaturedChange>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    let change = req.into_inner();

    match admin.set_featured.execute(change).await {
        Ok(()) => ApiResponse::message(&format!(
            "Featured status updated for {}",
            change.item_type.as_str()
        )),
        Err(e) => admin_error(e),
    }
}
