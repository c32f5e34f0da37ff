use actix_web::{delete, post, put, web, Responder};
use uuid::Uuid;

use super::planning_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::planning::application::domain::{
    ItemChangesBody, Planning, PlanningSection, SectionItemChanges, SectionItems,
    SectionItemsBody,
};
use crate::modules::planning::application::planning_use_cases::PlanningUseCases;
use crate::shared::api::ApiResponse;

fn section_from_path(raw: &str) -> Result<PlanningSection, actix_web::HttpResponse> {
    raw.parse::<PlanningSection>()
        .map_err(|msg| ApiResponse::bad_request("VALIDATION_ERROR", &msg))
}

/// Add items to a section
///
/// Items get fresh ids. Nothing is stored when any item is invalid.
#[utoipa::path(
    post,
    path = "/api/v1/planning/{section}",
    tag = "planning",
    security(("bearer_auth" = [])),
    params(("section" = PlanningSection, Path, description = "budget, guests, timeline or checklist")),
    request_body = SectionItemsBody,
    responses(
        (status = 200, description = "Plan with the new items", body = inline(SuccessResponse<Planning>)),
        (status = 400, description = "Unknown section or invalid item", body = ErrorResponse),
        (status = 404, description = "No plan yet", body = ErrorResponse),
    )
)]
#[post("/planning/{section}")]
pub async fn add_planning_items_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<SectionItemsBody>,
    planning: web::Data<PlanningUseCases>,
) -> impl Responder {
    let section = match section_from_path(&path) {
        Ok(section) => section,
        Err(resp) => return resp,
    };
    let items = match SectionItems::parse(section, req.into_inner().items) {
        Ok(items) => items,
        Err(msg) => return ApiResponse::bad_request("VALIDATION_ERROR", &msg),
    };

    match planning
        .add_items
        .execute(user.actor().user_id.value(), items)
        .await
    {
        Ok(plan) => ApiResponse::success(plan),
        Err(e) => planning_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/planning/{section}/{item_id}",
    tag = "planning",
    security(("bearer_auth" = [])),
    params(
        ("section" = PlanningSection, Path, description = "budget, guests, timeline or checklist"),
        ("item_id" = Uuid, Path, description = "Item id"),
    ),
    request_body = ItemChangesBody,
    responses(
        (status = 200, description = "Plan with the updated item", body = inline(SuccessResponse<Planning>)),
        (status = 400, description = "Unknown section or invalid change", body = ErrorResponse),
        (status = 404, description = "Plan or item not found", body = ErrorResponse),
    )
)]
#[put("/planning/{section}/{item_id}")]
pub async fn update_planning_item_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, Uuid)>,
    req: web::Json<ItemChangesBody>,
    planning: web::Data<PlanningUseCases>,
) -> impl Responder {
    let (raw_section, item_id) = path.into_inner();
    let section = match section_from_path(&raw_section) {
        Ok(section) => section,
        Err(resp) => return resp,
    };
    let changes = match SectionItemChanges::parse(section, req.into_inner().0) {
        Ok(changes) => changes,
        Err(msg) => return ApiResponse::bad_request("VALIDATION_ERROR", &msg),
    };

    match planning
        .update_item
        .execute(user.actor().user_id.value(), item_id, changes)
        .await
    {
        Ok(plan) => ApiResponse::success(plan),
        Err(e) => planning_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/planning/{section}/{item_id}",
    tag = "planning",
    security(("bearer_auth" = [])),
    params(
        ("section" = PlanningSection, Path, description = "budget, guests, timeline or checklist"),
        ("item_id" = Uuid, Path, description = "Item id"),
    ),
    responses(
        (status = 200, description = "Plan without the item", body = inline(SuccessResponse<Planning>)),
        (status = 400, description = "Unknown section", body = ErrorResponse),
        (status = 404, description = "Plan or item not found", body = ErrorResponse),
    )
)]
#[delete("/planning/{section}/{item_id}")]
pub async fn remove_planning_item_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, Uuid)>,
    planning: web::Data<PlanningUseCases>,
) -> impl Responder {
    let (raw_section, item_id) = path.into_inner();
    let section = match section_from_path(&raw_section) {
        Ok(section) => section,
        Err(resp) => return resp,
    };

    match planning
        .remove_item
        .execute(user.actor().user_id.value(), section, item_id)
        .await
    {
        Ok(plan) => ApiResponse::success(plan),
        Err(e) => planning_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::planning::application::ports::incoming::use_cases::{
        AddPlanningItemsUseCase, PlanningError, RemovePlanningItemUseCase,
        UpdatePlanningItemUseCase,
    };
    use crate::tests::support::auth_helper::{bearer, token_provider_for};
    use crate::tests::support::stubs::sample_planning;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;

    struct InMemoryPlan;

    #[async_trait]
    impl AddPlanningItemsUseCase for InMemoryPlan {
        async fn execute(&self, user_id: Uuid, items: SectionItems) -> Result<Planning, PlanningError> {
            let mut plan = sample_planning(Uuid::new_v4(), user_id);
            plan.add_items(items, Utc::now())
                .map_err(PlanningError::Validation)?;
            Ok(plan)
        }
    }

    #[async_trait]
    impl UpdatePlanningItemUseCase for InMemoryPlan {
        async fn execute(
            &self,
            _: Uuid,
            _: Uuid,
            _: SectionItemChanges,
        ) -> Result<Planning, PlanningError> {
            Err(PlanningError::ItemNotFound)
        }
    }

    #[async_trait]
    impl RemovePlanningItemUseCase for InMemoryPlan {
        async fn execute(
            &self,
            _: Uuid,
            _: PlanningSection,
            _: Uuid,
        ) -> Result<Planning, PlanningError> {
            Err(PlanningError::ItemNotFound)
        }
    }

    async fn call(req: test::TestRequest) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(PlanningUseCases {
                    add_items: Arc::new(InMemoryPlan),
                    update_item: Arc::new(InMemoryPlan),
                    remove_item: Arc::new(InMemoryPlan),
                    ..PlanningUseCases::unused()
                }))
                .app_data(token_provider_for(Uuid::new_v4(), Role::Customer))
                .service(add_planning_items_handler)
                .service(update_planning_item_handler)
                .service(remove_planning_item_handler),
        )
        .await;

        test::call_service(&app, req.insert_header(bearer()).to_request()).await
    }

    #[actix_web::test]
    async fn adding_budget_items_updates_progress() {
        let resp = call(test::TestRequest::post().uri("/planning/budget").set_json(
            serde_json::json!({
                "items": [
                    { "category": "Venue", "item": "Hall", "planned_amount": 500000, "is_paid": true },
                    { "category": "Catering", "item": "Dinner", "planned_amount": 900000 }
                ]
            }),
        ))
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["budget_items"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["progress"]["budget"], 50);
        assert!(body["data"]["budget_items"][0]["id"].is_string());
    }

    #[actix_web::test]
    async fn unknown_section_is_400() {
        let resp = call(
            test::TestRequest::post()
                .uri("/planning/honeymoon")
                .set_json(serde_json::json!({ "items": [{ "title": "Book flights" }] })),
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn invalid_guest_is_400() {
        let resp = call(
            test::TestRequest::post()
                .uri("/planning/guests")
                .set_json(serde_json::json!({ "items": [{ "rsvp_status": "maybe" }] })),
        )
        .await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn updating_missing_item_is_404() {
        let resp = call(
            test::TestRequest::put()
                .uri(&format!("/planning/checklist/{}", Uuid::new_v4()))
                .set_json(serde_json::json!({ "is_completed": true })),
        )
        .await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ITEM_NOT_FOUND");
    }

    #[actix_web::test]
    async fn removing_missing_item_is_404() {
        let resp = call(
            test::TestRequest::delete().uri(&format!("/planning/timeline/{}", Uuid::new_v4())),
        )
        .await;

        assert_eq!(resp.status(), 404);
    }
}
