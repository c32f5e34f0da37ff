use std::sync::Arc;

use crate::modules::admin::application::ports::incoming::use_cases::{
    AnalyticsUseCase, DashboardUseCase, ListContentUseCase, ListUsersUseCase,
    ListVendorsForReviewUseCase, RecentActivityUseCase, SetFeaturedUseCase,
    UpdateContentStatusUseCase, UpdateUserStatusUseCase, UpdateVendorStatusUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub dashboard: Arc<dyn DashboardUseCase + Send + Sync>,
    pub recent_activity: Arc<dyn RecentActivityUseCase + Send + Sync>,
    pub analytics: Arc<dyn AnalyticsUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub list_content: Arc<dyn ListContentUseCase + Send + Sync>,
    pub list_vendors: Arc<dyn ListVendorsForReviewUseCase + Send + Sync>,
    pub update_vendor_status: Arc<dyn UpdateVendorStatusUseCase + Send + Sync>,
    pub update_content_status: Arc<dyn UpdateContentStatusUseCase + Send + Sync>,
    pub update_user_status: Arc<dyn UpdateUserStatusUseCase + Send + Sync>,
    pub set_featured: Arc<dyn SetFeaturedUseCase + Send + Sync>,
}
