use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::idea_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::ideas::application::domain::{Idea, IdeaListQuery, TrendingIdea};
use crate::modules::ideas::application::idea_use_cases::IdeaUseCases;
use crate::modules::ideas::application::services::{DEFAULT_RELATED_LIMIT, DEFAULT_TRENDING_LIMIT};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedLimit {
    /// Between 1 and 50.
    pub limit: Option<u64>,
}

/// List published ideas
///
/// The default `trending` sort ranks the whole filtered set before paging.
#[utoipa::path(
    get,
    path = "/api/v1/ideas",
    tag = "ideas",
    params(IdeaListQuery),
    responses(
        (status = 200, description = "Page of ideas", body = inline(SuccessResponse<PageResult<Idea>>)),
    )
)]
#[get("/ideas")]
pub async fn list_ideas_handler(
    query: web::Query<IdeaListQuery>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match ideas.list.execute(query.filter(), query.sort(), page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => idea_error(e),
    }
}

/// Trending ideas with their scores
#[utoipa::path(
    get,
    path = "/api/v1/ideas/trending",
    tag = "ideas",
    params(FeedLimit),
    responses(
        (status = 200, description = "Ideas, highest score first", body = inline(SuccessResponse<Vec<TrendingIdea>>)),
    )
)]
#[get("/ideas/trending")]
pub async fn trending_ideas_handler(
    query: web::Query<FeedLimit>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(DEFAULT_TRENDING_LIMIT);

    match ideas.trending.execute(limit).await {
        Ok(ranked) => ApiResponse::success(ranked),
        Err(e) => idea_error(e),
    }
}

/// Read a published idea
#[utoipa::path(
    get,
    path = "/api/v1/ideas/{id}",
    tag = "ideas",
    params(("id" = Uuid, Path, description = "Idea id")),
    responses(
        (status = 200, description = "Idea", body = inline(SuccessResponse<Idea>)),
        (status = 404, description = "Idea not found", body = ErrorResponse),
    )
)]
#[get("/ideas/{id}")]
pub async fn get_idea_handler(
    path: web::Path<Uuid>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    match ideas.get.execute(path.into_inner()).await {
        Ok(idea) => ApiResponse::success(idea),
        Err(e) => idea_error(e),
    }
}

/// Ideas sharing a category, type or tag
#[utoipa::path(
    get,
    path = "/api/v1/ideas/{id}/related",
    tag = "ideas",
    params(("id" = Uuid, Path, description = "Idea id"), FeedLimit),
    responses(
        (status = 200, description = "Related ideas", body = inline(SuccessResponse<Vec<Idea>>)),
        (status = 404, description = "Idea not found", body = ErrorResponse),
    )
)]
#[get("/ideas/{id}/related")]
pub async fn related_ideas_handler(
    path: web::Path<Uuid>,
    query: web::Query<FeedLimit>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(DEFAULT_RELATED_LIMIT);

    match ideas.related.execute(path.into_inner(), limit).await {
        Ok(related) => ApiResponse::success(related),
        Err(e) => idea_error(e),
    }
}
