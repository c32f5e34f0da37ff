use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{repository_error, visible_inquiry};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::inquiries::application::domain::{Inquiry, MessageRequest, StatusChange};
use crate::modules::inquiries::application::ports::incoming::use_cases::{
    AddInquiryMessageUseCase, DeleteInquiryUseCase, InquiryError, MarkInquiryReadUseCase,
    UpdateInquiryStatusUseCase,
};
use crate::modules::inquiries::application::ports::outgoing::{InquiryQuery, InquiryRepository};
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

// ============================================================================
// Add message
// ============================================================================

pub struct AddInquiryMessageService<Q, R, L>
where
    Q: InquiryQuery,
    R: InquiryRepository,
    L: VendorLookup,
{
    query: Q,
    repository: R,
    vendors: L,
}

impl<Q, R, L> AddInquiryMessageService<Q, R, L>
where
    Q: InquiryQuery,
    R: InquiryRepository,
    L: VendorLookup,
{
    pub fn new(query: Q, repository: R, vendors: L) -> Self {
        Self {
            query,
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<Q, R, L> AddInquiryMessageUseCase for AddInquiryMessageService<Q, R, L>
where
    Q: InquiryQuery + Send + Sync,
    R: InquiryRepository + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        inquiry_id: Uuid,
        request: MessageRequest,
    ) -> Result<Inquiry, InquiryError> {
        let mut inquiry = visible_inquiry(&self.query, &self.vendors, actor, inquiry_id).await?;

        inquiry
            .add_message(actor.user_id.value(), request, Utc::now())
            .map_err(InquiryError::Validation)?;

        self.repository
            .save(&inquiry)
            .await
            .map_err(repository_error)
    }
}

// ============================================================================
// Mark read
// ============================================================================

pub struct MarkInquiryReadService<Q, R, L>
where
    Q: InquiryQuery,
    R: InquiryRepository,
    L: VendorLookup,
{
    query: Q,
    repository: R,
    vendors: L,
}

impl<Q, R, L> MarkInquiryReadService<Q, R, L>
where
    Q: InquiryQuery,
    R: InquiryRepository,
    L: VendorLookup,
{
    pub fn new(query: Q, repository: R, vendors: L) -> Self {
        Self {
            query,
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<Q, R, L> MarkInquiryReadUseCase for MarkInquiryReadService<Q, R, L>
where
    Q: InquiryQuery + Send + Sync,
    R: InquiryRepository + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, inquiry_id: Uuid) -> Result<(), InquiryError> {
        let mut inquiry = visible_inquiry(&self.query, &self.vendors, actor, inquiry_id).await?;

        if inquiry.mark_read(actor.user_id.value(), Utc::now()) == 0 {
            return Ok(());
        }

        self.repository
            .save(&inquiry)
            .await
            .map_err(repository_error)?;
        Ok(())
    }
}

// ============================================================================
// Status
// ============================================================================

pub struct UpdateInquiryStatusService<Q, R, L>
where
    Q: InquiryQuery,
    R: InquiryRepository,
    L: VendorLookup,
{
    query: Q,
    repository: R,
    vendors: L,
}

impl<Q, R, L> UpdateInquiryStatusService<Q, R, L>
where
    Q: InquiryQuery,
    R: InquiryRepository,
    L: VendorLookup,
{
    pub fn new(query: Q, repository: R, vendors: L) -> Self {
        Self {
            query,
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<Q, R, L> UpdateInquiryStatusUseCase for UpdateInquiryStatusService<Q, R, L>
where
    Q: InquiryQuery + Send + Sync,
    R: InquiryRepository + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        inquiry_id: Uuid,
        change: StatusChange,
    ) -> Result<Inquiry, InquiryError> {
        let mut inquiry = visible_inquiry(&self.query, &self.vendors, actor, inquiry_id).await?;
        let previous = inquiry.status;

        inquiry.change_status(change, actor.user_id.value(), Utc::now());

        let saved = self
            .repository
            .save(&inquiry)
            .await
            .map_err(repository_error)?;

        if saved.status != previous {
            info!(
                inquiry_id = %saved.id,
                from = %previous,
                to = %saved.status,
                "Inquiry status changed"
            );
        }
        Ok(saved)
    }
}

// ============================================================================
// Delete
// ============================================================================

pub struct DeleteInquiryService<Q, R, L>
where
    Q: InquiryQuery,
    R: InquiryRepository,
    L: VendorLookup,
{
    query: Q,
    repository: R,
    vendors: L,
}

impl<Q, R, L> DeleteInquiryService<Q, R, L>
where
    Q: InquiryQuery,
    R: InquiryRepository,
    L: VendorLookup,
{
    pub fn new(query: Q, repository: R, vendors: L) -> Self {
        Self {
            query,
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<Q, R, L> DeleteInquiryUseCase for DeleteInquiryService<Q, R, L>
where
    Q: InquiryQuery + Send + Sync,
    R: InquiryRepository + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, inquiry_id: Uuid) -> Result<(), InquiryError> {
        visible_inquiry(&self.query, &self.vendors, actor, inquiry_id).await?;

        self.repository
            .soft_delete(inquiry_id)
            .await
            .map_err(repository_error)?;

        info!(inquiry_id = %inquiry_id, "Inquiry deleted");
        Ok(())
    }
}
