pub mod add_favorite;
pub mod list_favorites;
pub mod manage_favorites;

pub use add_favorite::*;
pub use list_favorites::*;
pub use manage_favorites::*;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::favorites::application::ports::incoming::use_cases::FavoriteError;
use crate::shared::api::ApiResponse;

pub(crate) fn favorite_error(e: FavoriteError) -> HttpResponse {
    match e {
        FavoriteError::NotFound => ApiResponse::not_found("FAVORITE_NOT_FOUND", "Favorite not found"),
        FavoriteError::VendorNotFound => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found")
        }
        FavoriteError::AlreadyExists => {
            ApiResponse::conflict("FAVORITE_ALREADY_EXISTS", "Vendor already in favorites")
        }
        FavoriteError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        FavoriteError::Repository(msg) => {
            error!(error = %msg, "Favorite operation failed");
            ApiResponse::internal_error()
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_favorite_handler)
        .service(list_favorites_handler)
        .service(favorites_by_category_handler)
        .service(check_favorite_handler)
        .service(remove_vendor_favorite_handler)
        .service(update_favorite_handler)
        .service(remove_favorite_handler);
}
