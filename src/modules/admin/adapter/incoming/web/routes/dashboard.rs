use actix_web::{get, web, Responder};

use super::admin_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::domain::{
    ActivityItem, ActivityParams, Analytics, DashboardParams, DashboardStats,
};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;

/// Platform overview
///
/// Counts rows created in the window given by `start_date`/`end_date`
/// (inclusive) or by `period`. Without either, counts everything.
#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(DashboardParams),
    responses(
        (status = 200, description = "Dashboard figures", body = inline(SuccessResponse<DashboardStats>)),
        (status = 400, description = "Invalid date window", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/admin/dashboard")]
pub async fn dashboard_handler(
    _admin: AdminUser,
    params: web::Query<DashboardParams>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    match admin.dashboard.execute(params.into_inner()).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => admin_error(e),
    }
}

/// Latest sign-ups, vendors, ideas and bookings
///
/// Merges the five newest of each kind, newest first, cut to `limit`.
#[utoipa::path(
    get,
    path = "/api/v1/admin/activity",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(ActivityParams),
    responses(
        (status = 200, description = "Recent activity", body = inline(SuccessResponse<Vec<ActivityItem>>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/admin/activity")]
pub async fn recent_activity_handler(
    _admin: AdminUser,
    params: web::Query<ActivityParams>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    match admin.recent_activity.execute(params.into_inner()).await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => admin_error(e),
    }
}

/// Growth and revenue trends
///
/// Daily sign-ups and paid revenue over the same window as the dashboard,
/// the ten approved vendors with the most booking revenue, and how many
/// approved vendors offer each category.
#[utoipa::path(
    get,
    path = "/api/v1/admin/analytics",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(DashboardParams),
    responses(
        (status = 200, description = "Analytics", body = inline(SuccessResponse<Analytics>)),
        (status = 400, description = "Invalid date window", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/admin/analytics")]
pub async fn analytics_handler(
    _admin: AdminUser,
    params: web::Query<DashboardParams>,
    admin: web::Data<AdminUseCases>,
) -> impl Responder {
    match admin.analytics.execute(params.into_inner()).await {
        Ok(analytics) => ApiResponse::success(analytics),
        Err(e) => admin_error(e),
    }
}
