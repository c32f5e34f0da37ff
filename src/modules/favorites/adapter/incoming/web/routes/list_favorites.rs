use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::favorite_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::favorites::application::domain::{
    Favorite, FavoriteListQuery, FavoriteStatus,
};
use crate::modules::favorites::application::favorite_use_cases::FavoriteUseCases;
use crate::shared::api::ApiResponse;

/// The caller's favorites, newest first
#[utoipa::path(
    get,
    path = "/api/v1/users/favorites",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(FavoriteListQuery),
    responses(
        (status = 200, description = "Favorites", body = inline(SuccessResponse<Vec<Favorite>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/users/favorites")]
pub async fn list_favorites_handler(
    user: AuthenticatedUser,
    query: web::Query<FavoriteListQuery>,
    favorites: web::Data<FavoriteUseCases>,
) -> impl Responder {
    match favorites.list.execute(user.actor(), query.category()).await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => favorite_error(e),
    }
}

/// The caller's favorites saved under one category
#[utoipa::path(
    get,
    path = "/api/v1/users/favorites/category/{category}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("category" = String, Path, description = "Category, case-insensitive")),
    responses(
        (status = 200, description = "Favorites", body = inline(SuccessResponse<Vec<Favorite>>)),
    )
)]
#[get("/users/favorites/category/{category}")]
pub async fn favorites_by_category_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    favorites: web::Data<FavoriteUseCases>,
) -> impl Responder {
    match favorites
        .list
        .execute(user.actor(), Some(path.into_inner()))
        .await
    {
        Ok(list) => ApiResponse::success(list),
        Err(e) => favorite_error(e),
    }
}

/// Whether the caller has saved a vendor
#[utoipa::path(
    get,
    path = "/api/v1/users/favorites/check/{vendor_id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("vendor_id" = Uuid, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Favorite status", body = inline(SuccessResponse<FavoriteStatus>)),
    )
)]
#[get("/users/favorites/check/{vendor_id}")]
pub async fn check_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    favorites: web::Data<FavoriteUseCases>,
) -> impl Responder {
    match favorites.check.execute(user.actor(), path.into_inner()).await {
        Ok(status) => ApiResponse::success(status),
        Err(e) => favorite_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Actor, Role};
    use crate::modules::favorites::application::ports::incoming::use_cases::{
        CheckFavoriteUseCase, FavoriteError, ListFavoritesUseCase,
    };
    use crate::tests::support::auth_helper::{bearer, token_provider_for};
    use crate::tests::support::stubs::sample_favorite;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CapturingList {
        seen: Mutex<Option<Option<String>>>,
    }

    #[async_trait]
    impl ListFavoritesUseCase for CapturingList {
        async fn execute(
            &self,
            actor: Actor,
            category: Option<String>,
        ) -> Result<Vec<Favorite>, FavoriteError> {
            *self.seen.lock().unwrap() = Some(category);
            Ok(vec![sample_favorite(
                Uuid::new_v4(),
                actor.user_id.value(),
                Uuid::new_v4(),
            )])
        }
    }

    struct SavedVendor(Uuid);

    #[async_trait]
    impl CheckFavoriteUseCase for SavedVendor {
        async fn execute(&self, _: Actor, vendor_id: Uuid) -> Result<FavoriteStatus, FavoriteError> {
            Ok(FavoriteStatus {
                vendor_id,
                is_favorited: vendor_id == self.0,
            })
        }
    }

    async fn list(uri: &str) -> (serde_json::Value, Option<String>) {
        let capture = Arc::new(CapturingList::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FavoriteUseCases {
                    list: capture.clone(),
                    ..FavoriteUseCases::unused()
                }))
                .app_data(token_provider_for(Uuid::new_v4(), Role::Customer))
                .service(list_favorites_handler)
                .service(favorites_by_category_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body_json(resp).await;
        let seen = capture.seen.lock().unwrap().clone().unwrap();
        (body, seen)
    }

    #[actix_web::test]
    async fn list_embeds_vendor_summary() {
        let (body, category) = list("/users/favorites").await;

        assert_eq!(category, None);
        assert_eq!(body["data"][0]["vendor"]["business_name"], "Lotus Studio");
    }

    #[actix_web::test]
    async fn category_from_query_and_path() {
        let (_, from_query) = list("/users/favorites?category=Photography").await;
        let (_, from_path) = list("/users/favorites/category/venues").await;

        assert_eq!(from_query.as_deref(), Some("photography"));
        assert_eq!(from_path.as_deref(), Some("venues"));
    }

    #[actix_web::test]
    async fn check_reports_status() {
        let saved = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FavoriteUseCases {
                    check: Arc::new(SavedVendor(saved)),
                    ..FavoriteUseCases::unused()
                }))
                .app_data(token_provider_for(Uuid::new_v4(), Role::Customer))
                .service(check_favorite_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/users/favorites/check/{saved}"))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["is_favorited"], true);
    }
}
