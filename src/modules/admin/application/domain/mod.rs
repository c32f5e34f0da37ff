pub mod dashboard;
pub mod insights;
pub mod listing;
pub mod moderation;

pub use dashboard::{
    Completion, DashboardCounts, DashboardParams, DashboardStats, DateRange, Overview,
    PendingWork, StatsPeriod,
};
pub use insights::{
    latest_activity, ActivityItem, ActivityKind, ActivityParams, Analytics, AnalyticsFigures,
    CategoryShare, DailyCount, DailyRevenue, TopVendor, Trends, ACTIVITY_PER_KIND,
};
pub use listing::{
    AdminContentListQuery, AdminUserListQuery, ContentFilter, ContentSort, ContentSortField,
    UserListFilter, UserSort, UserSortField,
};
pub use moderation::{
    AdminVendorListQuery, ContentStatusChange, FeaturedChange, FeaturedItemType,
    UserStatusChange, VendorStatusChange,
};
