use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshTokenUseCase, RefreshedToken,
};
use crate::modules::auth::application::ports::outgoing::token_provider::REFRESH_TOKEN;
use crate::modules::auth::application::ports::outgoing::{TokenProvider, UserQuery};

/// Issues a new access token from a refresh token. Regular accounts are re-read
/// so a disabled user or a changed role takes effect on the next refresh.
pub struct RefreshTokenService<Q>
where
    Q: UserQuery,
{
    query: Q,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> RefreshTokenService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { query, tokens }
    }
}

#[async_trait]
impl<Q> RefreshTokenUseCase for RefreshTokenService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, refresh_token: String) -> Result<RefreshedToken, RefreshTokenError> {
        let claims = self
            .tokens
            .verify_token(&refresh_token)
            .map_err(|_| RefreshTokenError::InvalidToken)?;

        if claims.token_type != REFRESH_TOKEN {
            return Err(RefreshTokenError::InvalidTokenType);
        }

        let (role, is_verified) = if claims.role == Role::SuperAdmin {
            (claims.role, claims.is_verified)
        } else {
            let user = self
                .query
                .find_by_id(claims.sub)
                .await
                .map_err(|e| RefreshTokenError::Repository(e.to_string()))?
                .ok_or(RefreshTokenError::InvalidToken)?;

            if !user.is_active {
                return Err(RefreshTokenError::AccountDisabled);
            }
            (user.role, user.is_verified)
        };

        let access_token = self
            .tokens
            .generate_access_token(claims.sub, role, is_verified)
            .map_err(|e| RefreshTokenError::Token(e.to_string()))?;

        Ok(RefreshedToken {
            access_token,
            token_type: "Bearer".to_string(),
        })
    }
}
