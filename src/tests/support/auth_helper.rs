use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use super::stubs::{claims_for, StubTokenProvider};
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN,
};

pub type TokenProviderData = web::Data<Arc<dyn TokenProvider + Send + Sync>>;

/// Token provider whose every bearer token authenticates as `user_id` with `role`.
pub fn token_provider_for(user_id: Uuid, role: Role) -> TokenProviderData {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider::with_claims(
        claims_for(user_id, role, ACCESS_TOKEN),
    ));
    web::Data::new(provider)
}

/// Token provider issuing claims of an arbitrary token type.
pub fn token_provider_with_type(user_id: Uuid, role: Role, token_type: &str) -> TokenProviderData {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider::with_claims(
        claims_for(user_id, role, token_type),
    ));
    web::Data::new(provider)
}

pub fn rejecting_token_provider() -> TokenProviderData {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider::rejecting());
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
