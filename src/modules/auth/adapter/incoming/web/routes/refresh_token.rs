use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshedToken,
};
use crate::shared::api::ApiResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshedToken>)),
        (status = 401, description = "Invalid refresh token", body = ErrorResponse),
        (status = 403, description = "Account disabled", body = ErrorResponse),
    )
)]
#[post("/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    auth: web::Data<AuthUseCases>,
) -> impl Responder {
    match auth.refresh.execute(req.into_inner().refresh_token).await {
        Ok(token) => ApiResponse::success(token),
        Err(RefreshTokenError::InvalidTokenType) => {
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Refresh token expected")
        }
        Err(RefreshTokenError::InvalidToken) => {
            warn!("Refresh rejected: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired refresh token")
        }
        Err(RefreshTokenError::AccountDisabled) => {
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account has been disabled")
        }
        Err(e) => {
            error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::incoming::use_cases::RefreshTokenUseCase;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockRefresh {
        result: Result<RefreshedToken, RefreshTokenError>,
    }

    #[async_trait]
    impl RefreshTokenUseCase for MockRefresh {
        async fn execute(&self, _: String) -> Result<RefreshedToken, RefreshTokenError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<RefreshedToken, RefreshTokenError>) -> (u16, serde_json::Value) {
        let auth = AuthUseCases {
            refresh: Arc::new(MockRefresh { result }),
            ..AuthUseCases::unused()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(auth))
                .service(refresh_token_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "r" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn refresh_success() {
        let (status, body) = call(Ok(RefreshedToken {
            access_token: "new-access".into(),
            token_type: "Bearer".into(),
        }))
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["access_token"], "new-access");
    }

    #[actix_web::test]
    async fn refresh_with_access_token() {
        let (status, body) = call(Err(RefreshTokenError::InvalidTokenType)).await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN_TYPE");
    }

    #[actix_web::test]
    async fn refresh_with_garbage() {
        let (status, body) = call(Err(RefreshTokenError::InvalidToken)).await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }
}
