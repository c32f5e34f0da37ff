use actix_web::{get, put, web, Responder};
use uuid::Uuid;

use super::admin_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::domain::{AdminVendorListQuery, VendorStatusChange};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::vendors::application::domain::Vendor;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};

/// Vendors awaiting review
///
/// Lists vendors of any status, `pending` unless `status` says otherwise.
#[utoipa::path(
    get,
    path = "/api/v1/admin/vendors",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(AdminVendorListQuery),
    responses(
        (status = 200, description = "Page of vendors", body = inline(SuccessResponse<PageResult<Vendor>>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/admin/vendors")]
pub async fn list_vendors_for_review_handler(
    _admin: AdminUser,
    query: web::Query<AdminVendorListQuery>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match admin
        .list_vendors
        .execute(query.filter(), query.sort(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => admin_error(e),
    }
}

/// Approve, reject or suspend a vendor
///
/// Approval and rejection email the vendor in the background.
#[utoipa::path(
    put,
    path = "/api/v1/admin/vendors/{id}/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vendor id")),
    request_body = VendorStatusChange,
    responses(
        (status = 200, description = "Updated vendor", body = inline(SuccessResponse<Vendor>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
#[put("/admin/vendors/{id}/status")]
pub async fn update_vendor_status_handler(
    admin_user: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<VendorStatusChange>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    match admin
        .update_vendor_status
        .execute(admin_user.user_id(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(vendor) => ApiResponse::success(vendor),
        Err(e) => admin_error(e),
    }
}
