use async_trait::async_trait;
use uuid::Uuid;

use super::InquiryError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::inquiries::application::domain::{Inquiry, InquiryFilter, InquirySort};
use crate::shared::pagination::{PageRequest, PageResult};

/// Scoped like bookings: own inquiries, the business's inquiries, or all for admins.
#[async_trait]
pub trait ListInquiriesUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        filter: InquiryFilter,
        sort: InquirySort,
        page: PageRequest,
    ) -> Result<PageResult<Inquiry>, InquiryError>;
}

#[async_trait]
pub trait GetInquiryUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, inquiry_id: Uuid) -> Result<Inquiry, InquiryError>;
}

#[async_trait]
pub trait UnreadCountUseCase: Send + Sync {
    async fn execute(&self, actor: Actor) -> Result<u64, InquiryError>;
}

#[async_trait]
pub trait RecentInquiriesUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, limit: u64) -> Result<Vec<Inquiry>, InquiryError>;
}
