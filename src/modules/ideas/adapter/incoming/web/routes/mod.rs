pub mod browse_ideas;
pub mod create_idea;
pub mod engagement;
pub mod manage_idea;

pub use browse_ideas::*;
pub use create_idea::*;
pub use engagement::*;
pub use manage_idea::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::ideas::application::ports::incoming::use_cases::IdeaError;
use crate::shared::api::ApiResponse;

pub(crate) fn idea_error(e: IdeaError) -> HttpResponse {
    match e {
        IdeaError::NotFound => ApiResponse::not_found("IDEA_NOT_FOUND", "Idea not found"),
        IdeaError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        IdeaError::Forbidden(msg) => ApiResponse::forbidden("FORBIDDEN", &msg),
        IdeaError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        IdeaError::Repository(msg) => {
            error!(error = %msg, "Idea operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// `/ideas/trending` goes before `/ideas/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_idea_handler)
        .service(list_ideas_handler)
        .service(trending_ideas_handler)
        .service(get_idea_handler)
        .service(related_ideas_handler)
        .service(update_idea_handler)
        .service(delete_idea_handler)
        .service(like_idea_handler)
        .service(share_idea_handler);
}
