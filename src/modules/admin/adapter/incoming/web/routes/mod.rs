pub mod content_moderation;
pub mod dashboard;
pub mod user_moderation;
pub mod vendor_moderation;

pub use content_moderation::*;
pub use dashboard::*;
pub use user_moderation::*;
pub use vendor_moderation::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::admin::application::ports::incoming::use_cases::AdminError;
use crate::shared::api::ApiResponse;

pub(crate) fn admin_error(e: AdminError) -> HttpResponse {
    match e {
        AdminError::VendorNotFound => ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found"),
        AdminError::IdeaNotFound => ApiResponse::not_found("IDEA_NOT_FOUND", "Idea not found"),
        AdminError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        AdminError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        AdminError::Repository(msg) => {
            error!(error = %msg, "Admin operation failed");
            ApiResponse::internal_error()
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard_handler)
        .service(recent_activity_handler)
        .service(analytics_handler)
        .service(list_users_handler)
        .service(list_content_handler)
        .service(list_vendors_for_review_handler)
        .service(update_vendor_status_handler)
        .service(update_content_status_handler)
        .service(update_user_status_handler)
        .service(set_featured_handler);
}
