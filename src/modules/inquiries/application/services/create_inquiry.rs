use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use super::repository_error;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::inquiries::application::domain::{Inquiry, InquiryRequest, NewInquiry};
use crate::modules::inquiries::application::ports::incoming::use_cases::{
    CreateInquiryUseCase, InquiryError,
};
use crate::modules::inquiries::application::ports::outgoing::InquiryRepository;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

pub struct CreateInquiryService<R, L>
where
    R: InquiryRepository,
    L: VendorLookup,
{
    repository: R,
    vendors: L,
}

impl<R, L> CreateInquiryService<R, L>
where
    R: InquiryRepository,
    L: VendorLookup,
{
    pub fn new(repository: R, vendors: L) -> Self {
        Self {
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<R, L> CreateInquiryUseCase for CreateInquiryService<R, L>
where
    R: InquiryRepository + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, request: InquiryRequest) -> Result<Inquiry, InquiryError> {
        let new_inquiry = NewInquiry::from_request(actor.user_id.value(), request, Utc::now())
            .map_err(InquiryError::Validation)?;

        self.vendors
            .find_active(new_inquiry.vendor_id)
            .await
            .map_err(|e| InquiryError::Repository(e.to_string()))?
            .ok_or(InquiryError::VendorNotFound)?;

        let inquiry = self
            .repository
            .create(new_inquiry)
            .await
            .map_err(repository_error)?;

        info!(
            inquiry_id = %inquiry.id,
            vendor_id = %inquiry.vendor_id,
            customer_id = %inquiry.customer_id,
            "Inquiry created"
        );
        Ok(inquiry)
    }
}
