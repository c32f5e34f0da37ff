use actix_web::{delete, get, post, put, web, Responder};

use super::planning_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::planning::application::domain::{
    Planning, PlanningChanges, PlanningRequest, PlanningStats,
};
use crate::modules::planning::application::planning_use_cases::PlanningUseCases;
use crate::shared::api::{ApiResponse, MessageBody};

/// Start a wedding plan
///
/// One active plan per user.
#[utoipa::path(
    post,
    path = "/api/v1/planning",
    tag = "planning",
    security(("bearer_auth" = [])),
    request_body = PlanningRequest,
    responses(
        (status = 201, description = "Plan created", body = inline(SuccessResponse<Planning>)),
        (status = 400, description = "Invalid details", body = ErrorResponse),
        (status = 409, description = "User already has a plan", body = ErrorResponse),
    )
)]
#[post("/planning")]
pub async fn create_planning_handler(
    user: AuthenticatedUser,
    req: web::Json<PlanningRequest>,
    planning: web::Data<PlanningUseCases>,
) -> impl Responder {
    match planning
        .create
        .execute(user.actor().user_id.value(), req.into_inner())
        .await
    {
        Ok(plan) => ApiResponse::created(plan),
        Err(e) => planning_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/planning",
    tag = "planning",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's plan", body = inline(SuccessResponse<Planning>)),
        (status = 404, description = "No plan yet", body = ErrorResponse),
    )
)]
#[get("/planning")]
pub async fn get_planning_handler(
    user: AuthenticatedUser,
    planning: web::Data<PlanningUseCases>,
) -> impl Responder {
    match planning.get.execute(user.actor().user_id.value()).await {
        Ok(plan) => ApiResponse::success(plan),
        Err(e) => planning_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/planning",
    tag = "planning",
    security(("bearer_auth" = [])),
    request_body = PlanningChanges,
    responses(
        (status = 200, description = "Updated plan", body = inline(SuccessResponse<Planning>)),
        (status = 400, description = "Empty or invalid update", body = ErrorResponse),
        (status = 404, description = "No plan yet", body = ErrorResponse),
    )
)]
#[put("/planning")]
pub async fn update_planning_handler(
    user: AuthenticatedUser,
    req: web::Json<PlanningChanges>,
    planning: web::Data<PlanningUseCases>,
) -> impl Responder {
    match planning
        .update
        .execute(user.actor().user_id.value(), req.into_inner())
        .await
    {
        Ok(plan) => ApiResponse::success(plan),
        Err(e) => planning_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/planning",
    tag = "planning",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Plan deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 404, description = "No plan yet", body = ErrorResponse),
    )
)]
#[delete("/planning")]
pub async fn delete_planning_handler(
    user: AuthenticatedUser,
    planning: web::Data<PlanningUseCases>,
) -> impl Responder {
    match planning.delete.execute(user.actor().user_id.value()).await {
        Ok(()) => ApiResponse::message("Planning document deleted successfully"),
        Err(e) => planning_error(e),
    }
}

/// Planning statistics
///
/// Totals and completion for every section plus the overall progress.
#[utoipa::path(
    get,
    path = "/api/v1/planning/stats",
    tag = "planning",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Section statistics", body = inline(SuccessResponse<PlanningStats>)),
        (status = 404, description = "No plan yet", body = ErrorResponse),
    )
)]
#[get("/planning/stats")]
pub async fn planning_stats_handler(
    user: AuthenticatedUser,
    planning: web::Data<PlanningUseCases>,
) -> impl Responder {
    match planning.stats.execute(user.actor().user_id.value()).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => planning_error(e),
    }
}
