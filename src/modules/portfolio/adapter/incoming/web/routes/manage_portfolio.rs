use actix_web::{delete, put, web, Responder};
use uuid::Uuid;

use super::portfolio_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::domain::{Portfolio, PortfolioDetails};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::shared::api::{ApiResponse, MessageBody};

/// Update a project (owning vendor only)
#[utoipa::path(
    put,
    path = "/api/v1/vendors/portfolio/{id}",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = PortfolioDetails,
    responses(
        (status = 200, description = "Updated project", body = inline(SuccessResponse<Portfolio>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[put("/vendors/portfolio/{id}")]
pub async fn update_portfolio_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PortfolioDetails>,
    portfolio: web::Data<PortfolioUseCases>,
) -> impl Responder {
    match portfolio
        .update
        .execute(user.actor(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => portfolio_error(e),
    }
}

/// Remove a project (owning vendor only)
#[utoipa::path(
    delete,
    path = "/api/v1/vendors/portfolio/{id}",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[delete("/vendors/portfolio/{id}")]
pub async fn delete_portfolio_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    portfolio: web::Data<PortfolioUseCases>,
) -> impl Responder {
    match portfolio.delete.execute(user.actor(), path.into_inner()).await {
        Ok(()) => ApiResponse::message("Portfolio deleted successfully"),
        Err(e) => portfolio_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Actor, Role};
    use crate::modules::portfolio::application::ports::incoming::use_cases::{
        DeletePortfolioUseCase, PortfolioError, UpdatePortfolioUseCase,
    };
    use crate::tests::support::auth_helper::{bearer, token_provider_for};
    use crate::tests::support::stubs::sample_portfolio;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct OwnerOnly {
        owner: Uuid,
    }

    #[async_trait]
    impl UpdatePortfolioUseCase for OwnerOnly {
        async fn execute(
            &self,
            actor: Actor,
            portfolio_id: Uuid,
            details: PortfolioDetails,
        ) -> Result<Portfolio, PortfolioError> {
            if actor.user_id.value() != self.owner {
                return Err(PortfolioError::Forbidden(
                    "You can only update your own portfolio".into(),
                ));
            }
            let mut portfolio = sample_portfolio(portfolio_id, Uuid::new_v4());
            if let Some(venue) = details.venue {
                portfolio.venue = Some(venue);
            }
            Ok(portfolio)
        }
    }

    #[async_trait]
    impl DeletePortfolioUseCase for OwnerOnly {
        async fn execute(&self, actor: Actor, _: Uuid) -> Result<(), PortfolioError> {
            if actor.user_id.value() != self.owner {
                return Err(PortfolioError::Forbidden(
                    "You can only delete your own portfolio".into(),
                ));
            }
            Ok(())
        }
    }

    fn use_cases(owner: Uuid) -> web::Data<PortfolioUseCases> {
        let service = Arc::new(OwnerOnly { owner });
        web::Data::new(PortfolioUseCases {
            update: service.clone(),
            delete: service,
            ..PortfolioUseCases::unused()
        })
    }

    #[actix_web::test]
    async fn owner_updates_venue() {
        let owner = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(use_cases(owner))
                .app_data(token_provider_for(owner, Role::Vendor))
                .service(update_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/vendors/portfolio/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .set_json(serde_json::json!({ "venue": "Galle Face Hotel" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["venue"], "Galle Face Hotel");
    }

    #[actix_web::test]
    async fn other_vendor_gets_403_on_delete() {
        let app = test::init_service(
            App::new()
                .app_data(use_cases(Uuid::new_v4()))
                .app_data(token_provider_for(Uuid::new_v4(), Role::Vendor))
                .service(delete_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/vendors/portfolio/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }

    #[actix_web::test]
    async fn owner_deletes() {
        let owner = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(use_cases(owner))
                .app_data(token_provider_for(owner, Role::Vendor))
                .service(delete_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/vendors/portfolio/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Portfolio deleted successfully");
    }
}
