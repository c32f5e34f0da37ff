use async_trait::async_trait;
use uuid::Uuid;

use super::InquiryError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::inquiries::application::domain::{Inquiry, MessageRequest, StatusChange};

#[async_trait]
pub trait AddInquiryMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        inquiry_id: Uuid,
        request: MessageRequest,
    ) -> Result<Inquiry, InquiryError>;
}

#[async_trait]
pub trait MarkInquiryReadUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, inquiry_id: Uuid) -> Result<(), InquiryError>;
}

#[async_trait]
pub trait UpdateInquiryStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        inquiry_id: Uuid,
        change: StatusChange,
    ) -> Result<Inquiry, InquiryError>;
}

#[async_trait]
pub trait DeleteInquiryUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, inquiry_id: Uuid) -> Result<(), InquiryError>;
}
