use async_trait::async_trait;

use crate::modules::admin::application::domain::{
    ActivityItem, AnalyticsFigures, DashboardCounts, DateRange,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Counts active rows created inside `range`.
    async fn counts(&self, range: DateRange) -> Result<DashboardCounts, DashboardQueryError>;

    /// Up to `per_kind` newest active users, vendors, ideas and bookings, in
    /// no particular order.
    async fn recent_activity(&self, per_kind: u64) -> Result<Vec<ActivityItem>, DashboardQueryError>;

    /// Daily sign-ups and paid revenue inside `range`, plus the `top` approved
    /// vendors by booking revenue and the category spread of approved vendors.
    async fn analytics(
        &self,
        range: DateRange,
        top: u64,
    ) -> Result<AnalyticsFigures, DashboardQueryError>;
}
