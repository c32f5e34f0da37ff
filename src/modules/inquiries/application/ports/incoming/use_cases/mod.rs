pub mod browse_inquiries;
pub mod create_inquiry;
pub mod manage_inquiry;

pub use browse_inquiries::{
    GetInquiryUseCase, ListInquiriesUseCase, RecentInquiriesUseCase, UnreadCountUseCase,
};
pub use create_inquiry::CreateInquiryUseCase;
pub use manage_inquiry::{
    AddInquiryMessageUseCase, DeleteInquiryUseCase, MarkInquiryReadUseCase,
    UpdateInquiryStatusUseCase,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InquiryError {
    #[error("Inquiry not found")]
    NotFound,

    #[error("Vendor not found")]
    VendorNotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
