pub mod manage_planning;
pub mod planning_items;

pub use manage_planning::*;
pub use planning_items::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::planning::application::ports::incoming::use_cases::PlanningError;
use crate::shared::api::ApiResponse;

pub(crate) fn planning_error(e: PlanningError) -> HttpResponse {
    match e {
        PlanningError::NotFound => {
            ApiResponse::not_found("PLANNING_NOT_FOUND", "Planning document not found")
        }
        PlanningError::AlreadyExists => ApiResponse::conflict(
            "PLANNING_ALREADY_EXISTS",
            "A planning document already exists for this user",
        ),
        PlanningError::ItemNotFound => ApiResponse::not_found("ITEM_NOT_FOUND", "Item not found"),
        PlanningError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        PlanningError::Repository(msg) => {
            error!(error = %msg, "Planning operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// `/planning/stats` goes before `/planning/{section}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_planning_handler)
        .service(get_planning_handler)
        .service(update_planning_handler)
        .service(delete_planning_handler)
        .service(planning_stats_handler)
        .service(add_planning_items_handler)
        .service(update_planning_item_handler)
        .service(remove_planning_item_handler);
}
