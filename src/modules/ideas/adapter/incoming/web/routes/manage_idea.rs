use actix_web::{delete, put, web, Responder};
use uuid::Uuid;

use super::idea_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::ideas::application::domain::{Idea, IdeaChanges};
use crate::modules::ideas::application::idea_use_cases::IdeaUseCases;
use crate::shared::api::{ApiResponse, MessageBody};

/// Edit an idea
///
/// Author or admin. Publishing for the first time stamps `published_at`.
#[utoipa::path(
    put,
    path = "/api/v1/ideas/{id}",
    tag = "ideas",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Idea id")),
    request_body = IdeaChanges,
    responses(
        (status = 200, description = "Updated idea", body = inline(SuccessResponse<Idea>)),
        (status = 400, description = "Empty or invalid update", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Idea not found", body = ErrorResponse),
    )
)]
#[put("/ideas/{id}")]
pub async fn update_idea_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<IdeaChanges>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    match ideas
        .update
        .execute(user.actor(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(idea) => ApiResponse::success(idea),
        Err(e) => idea_error(e),
    }
}

/// Delete an idea
#[utoipa::path(
    delete,
    path = "/api/v1/ideas/{id}",
    tag = "ideas",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Idea id")),
    responses(
        (status = 200, description = "Idea deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Idea not found", body = ErrorResponse),
    )
)]
#[delete("/ideas/{id}")]
pub async fn delete_idea_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    match ideas.delete.execute(user.actor(), path.into_inner()).await {
        Ok(()) => ApiResponse::message("Idea deleted successfully"),
        Err(e) => idea_error(e),
    }
}
