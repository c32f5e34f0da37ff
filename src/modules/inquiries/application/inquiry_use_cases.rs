use std::sync::Arc;

use crate::modules::inquiries::application::ports::incoming::use_cases::{
    AddInquiryMessageUseCase, CreateInquiryUseCase, DeleteInquiryUseCase, GetInquiryUseCase,
    ListInquiriesUseCase, MarkInquiryReadUseCase, RecentInquiriesUseCase, UnreadCountUseCase,
    UpdateInquiryStatusUseCase,
};

#[derive(Clone)]
pub struct InquiryUseCases {
    pub create: Arc<dyn CreateInquiryUseCase + Send + Sync>,
    pub list: Arc<dyn ListInquiriesUseCase + Send + Sync>,
    pub get: Arc<dyn GetInquiryUseCase + Send + Sync>,
    pub unread_count: Arc<dyn UnreadCountUseCase + Send + Sync>,
    pub recent: Arc<dyn RecentInquiriesUseCase + Send + Sync>,
    pub add_message: Arc<dyn AddInquiryMessageUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkInquiryReadUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateInquiryStatusUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteInquiryUseCase + Send + Sync>,
}
