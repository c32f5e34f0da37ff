use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::inquiries::application::domain::{Inquiry, NewInquiry};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InquiryRepositoryError {
    #[error("Inquiry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Inserts the inquiry and bumps the vendor's `inquiry_count` in one transaction.
    async fn create(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryRepositoryError>;

    /// Persists the thread, status and closing fields of a loaded inquiry.
    async fn save(&self, inquiry: &Inquiry) -> Result<Inquiry, InquiryRepositoryError>;

    async fn soft_delete(&self, inquiry_id: Uuid) -> Result<(), InquiryRepositoryError>;
}
