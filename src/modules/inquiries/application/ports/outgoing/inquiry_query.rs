use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::inquiries::application::domain::{Inquiry, InquiryFilter, InquirySort};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::scope::PartyScope;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InquiryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait InquiryQuery: Send + Sync {
    async fn find_by_id(&self, inquiry_id: Uuid) -> Result<Option<Inquiry>, InquiryQueryError>;

    async fn list(
        &self,
        scope: PartyScope,
        filter: InquiryFilter,
        sort: InquirySort,
        page: PageRequest,
    ) -> Result<PageResult<Inquiry>, InquiryQueryError>;

    /// Inquiries in scope holding at least one unread message not sent by `reader`.
    async fn unread_count(&self, scope: PartyScope, reader: Uuid) -> Result<u64, InquiryQueryError>;

    /// Most recently active first.
    async fn recent(&self, scope: PartyScope, limit: u64) -> Result<Vec<Inquiry>, InquiryQueryError>;
}
