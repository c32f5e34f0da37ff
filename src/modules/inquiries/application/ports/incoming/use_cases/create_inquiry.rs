use async_trait::async_trait;

use super::InquiryError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::inquiries::application::domain::{Inquiry, InquiryRequest};

#[async_trait]
pub trait CreateInquiryUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, request: InquiryRequest) -> Result<Inquiry, InquiryError>;
}
