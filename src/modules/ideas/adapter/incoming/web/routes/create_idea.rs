use actix_web::{post, web, Responder};

use super::idea_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::ideas::application::domain::{Idea, IdeaRequest};
use crate::modules::ideas::application::idea_use_cases::IdeaUseCases;
use crate::shared::api::ApiResponse;

/// Write an idea
///
/// Vendors only. New ideas start unpublished.
#[utoipa::path(
    post,
    path = "/api/v1/ideas",
    tag = "ideas",
    security(("bearer_auth" = [])),
    request_body = IdeaRequest,
    responses(
        (status = 201, description = "Idea created", body = inline(SuccessResponse<Idea>)),
        (status = 400, description = "Missing title or content", body = ErrorResponse),
        (status = 403, description = "Caller is not a vendor", body = ErrorResponse),
    )
)]
#[post("/ideas")]
pub async fn create_idea_handler(
    user: AuthenticatedUser,
    req: web::Json<IdeaRequest>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    match ideas.create.execute(user.actor(), req.into_inner()).await {
        Ok(idea) => ApiResponse::created(idea),
        Err(e) => idea_error(e),
    }
}
