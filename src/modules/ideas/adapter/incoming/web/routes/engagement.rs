use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::idea_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::ideas::application::domain::{LikeOutcome, LikeRequest};
use crate::modules::ideas::application::idea_use_cases::IdeaUseCases;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShareOutcome {
    #[schema(example = "Idea shared")]
    pub message: String,
    pub share_count: i32,
}

/// Like or unlike an idea
#[utoipa::path(
    post,
    path = "/api/v1/ideas/{id}/like",
    tag = "ideas",
    params(("id" = Uuid, Path, description = "Idea id")),
    request_body = LikeRequest,
    responses(
        (status = 200, description = "New like count", body = inline(SuccessResponse<LikeOutcome>)),
        (status = 404, description = "Idea not found", body = ErrorResponse),
    )
)]
#[post("/ideas/{id}/like")]
pub async fn like_idea_handler(
    path: web::Path<Uuid>,
    req: web::Json<LikeRequest>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    match ideas.like.execute(path.into_inner(), req.is_liked).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => idea_error(e),
    }
}

/// Count a share
#[utoipa::path(
    post,
    path = "/api/v1/ideas/{id}/share",
    tag = "ideas",
    params(("id" = Uuid, Path, description = "Idea id")),
    responses(
        (status = 200, description = "New share count", body = inline(SuccessResponse<ShareOutcome>)),
        (status = 404, description = "Idea not found", body = ErrorResponse),
    )
)]
#[post("/ideas/{id}/share")]
pub async fn share_idea_handler(
    path: web::Path<Uuid>,
    ideas: web::Data<IdeaUseCases>,
) -> impl Responder {
    match ideas.share.execute(path.into_inner()).await {
        Ok(share_count) => ApiResponse::success(ShareOutcome {
            message: "Idea shared".to_string(),
            share_count,
        }),
        Err(e) => idea_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ideas::application::ports::incoming::use_cases::{
        IdeaError, LikeIdeaUseCase, ShareIdeaUseCase,
    };
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Counters;

    #[async_trait]
    impl LikeIdeaUseCase for Counters {
        async fn execute(&self, _: Uuid, liked: bool) -> Result<LikeOutcome, IdeaError> {
            Ok(LikeOutcome {
                message: if liked { "Idea liked" } else { "Idea unliked" }.to_string(),
                like_count: if liked { 1 } else { 0 },
            })
        }
    }

    #[async_trait]
    impl ShareIdeaUseCase for Counters {
        async fn execute(&self, _: Uuid) -> Result<i32, IdeaError> {
            Err(IdeaError::NotFound)
        }
    }

    async fn call(req: test::TestRequest) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(IdeaUseCases {
                    like: Arc::new(Counters),
                    share: Arc::new(Counters),
                    ..IdeaUseCases::unused()
                }))
                .service(like_idea_handler)
                .service(share_idea_handler),
        )
        .await;

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn like_needs_no_login() {
        let resp = call(
            test::TestRequest::post()
                .uri(&format!("/ideas/{}/like", Uuid::new_v4()))
                .set_json(serde_json::json!({ "is_liked": true })),
        )
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Idea liked");
        assert_eq!(body["data"]["like_count"], 1);
    }

    #[actix_web::test]
    async fn sharing_missing_idea_is_404() {
        let resp =
            call(test::TestRequest::post().uri(&format!("/ideas/{}/share", Uuid::new_v4()))).await;

        assert_eq!(resp.status(), 404);
    }
}
