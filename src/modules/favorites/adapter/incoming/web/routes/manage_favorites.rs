use actix_web::{delete, patch, web, Responder};
use uuid::Uuid;

use super::favorite_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::favorites::application::domain::{Favorite, FavoriteChanges};
use crate::modules::favorites::application::favorite_use_cases::FavoriteUseCases;
use crate::shared::api::{ApiResponse, MessageBody};

/// Edit the notes or category of a favorite
///
/// A blank value clears the field.
#[utoipa::path(
    patch,
    path = "/api/v1/users/favorites/{id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Favorite id")),
    request_body = FavoriteChanges,
    responses(
        (status = 200, description = "Updated favorite", body = inline(SuccessResponse<Favorite>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse),
    )
)]
#[patch("/users/favorites/{id}")]
pub async fn update_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<FavoriteChanges>,
    favorites: web::Data<FavoriteUseCases>,
) -> impl Responder {
    match favorites
        .update
        .execute(user.actor(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(favorite) => ApiResponse::success(favorite),
        Err(e) => favorite_error(e),
    }
}

/// Remove a favorite
#[utoipa::path(
    delete,
    path = "/api/v1/users/favorites/{id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Favorite id")),
    responses(
        (status = 200, description = "Favorite removed", body = inline(SuccessResponse<MessageBody>)),
        (status = 404, description = "Favorite not found", body = ErrorResponse),
    )
)]
#[delete("/users/favorites/{id}")]
pub async fn remove_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    favorites: web::Data<FavoriteUseCases>,
) -> impl Responder {
    match favorites.remove.execute(user.actor(), path.into_inner()).await {
        Ok(()) => ApiResponse::message("Favorite removed successfully"),
        Err(e) => favorite_error(e),
    }
}

/// Remove the favorite saved for a vendor
#[utoipa::path(
    delete,
    path = "/api/v1/users/favorites/vendor/{vendor_id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("vendor_id" = Uuid, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Favorite removed", body = inline(SuccessResponse<MessageBody>)),
        (status = 404, description = "Vendor is not in favorites", body = ErrorResponse),
    )
)]
#[delete("/users/favorites/vendor/{vendor_id}")]
pub async fn remove_vendor_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    favorites: web::Data<FavoriteUseCases>,
) -> impl Responder {
    match favorites
        .remove_by_vendor
        .execute(user.actor(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::message("Favorite removed successfully"),
        Err(e) => favorite_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Actor, Role};
    use crate::modules::favorites::application::ports::incoming::use_cases::{
        FavoriteError, RemoveFavoriteUseCase, RemoveVendorFavoriteUseCase, UpdateFavoriteUseCase,
    };
    use crate::tests::support::auth_helper::{bearer, token_provider_for};
    use crate::tests::support::stubs::sample_favorite;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Knows one favorite by id and vendor.
    struct OneFavorite {
        id: Uuid,
        vendor_id: Uuid,
    }

    #[async_trait]
    impl UpdateFavoriteUseCase for OneFavorite {
        async fn execute(
            &self,
            actor: Actor,
            favorite_id: Uuid,
            changes: FavoriteChanges,
        ) -> Result<Favorite, FavoriteError> {
            if favorite_id != self.id {
                return Err(FavoriteError::NotFound);
            }
            let mut favorite = sample_favorite(favorite_id, actor.user_id.value(), self.vendor_id);
            favorite.notes = changes.notes;
            Ok(favorite)
        }
    }

    #[async_trait]
    impl RemoveFavoriteUseCase for OneFavorite {
        async fn execute(&self, _: Actor, favorite_id: Uuid) -> Result<(), FavoriteError> {
            if favorite_id == self.id {
                Ok(())
            } else {
                Err(FavoriteError::NotFound)
            }
        }
    }

    #[async_trait]
    impl RemoveVendorFavoriteUseCase for OneFavorite {
        async fn execute(&self, _: Actor, vendor_id: Uuid) -> Result<(), FavoriteError> {
            if vendor_id == self.vendor_id {
                Ok(())
            } else {
                Err(FavoriteError::NotFound)
            }
        }
    }

    async fn call(known: OneFavorite, req: test::TestRequest) -> actix_web::dev::ServiceResponse {
        let known = Arc::new(known);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FavoriteUseCases {
                    update: known.clone(),
                    remove: known.clone(),
                    remove_by_vendor: known,
                    ..FavoriteUseCases::unused()
                }))
                .app_data(token_provider_for(Uuid::new_v4(), Role::Customer))
                .service(remove_vendor_favorite_handler)
                .service(update_favorite_handler)
                .service(remove_favorite_handler),
        )
        .await;

        test::call_service(&app, req.insert_header(bearer()).to_request()).await
    }

    #[actix_web::test]
    async fn patch_updates_notes() {
        let id = Uuid::new_v4();
        let resp = call(
            OneFavorite {
                id,
                vendor_id: Uuid::new_v4(),
            },
            test::TestRequest::patch()
                .uri(&format!("/users/favorites/{id}"))
                .set_json(serde_json::json!({ "notes": "Shortlisted" })),
        )
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["notes"], "Shortlisted");
    }

    #[actix_web::test]
    async fn delete_unknown_favorite_is_404() {
        let resp = call(
            OneFavorite {
                id: Uuid::new_v4(),
                vendor_id: Uuid::new_v4(),
            },
            test::TestRequest::delete().uri(&format!("/users/favorites/{}", Uuid::new_v4())),
        )
        .await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FAVORITE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn delete_by_vendor_path() {
        let vendor_id = Uuid::new_v4();
        let resp = call(
            OneFavorite {
                id: Uuid::new_v4(),
                vendor_id,
            },
            test::TestRequest::delete().uri(&format!("/users/favorites/vendor/{vendor_id}")),
        )
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Favorite removed successfully");
    }
}
