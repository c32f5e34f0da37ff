use async_trait::async_trait;

use super::AdminError;
use crate::modules::admin::application::domain::{
    ActivityItem, ActivityParams, Analytics, DashboardParams, DashboardStats,
};

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    async fn execute(&self, params: DashboardParams) -> Result<DashboardStats, AdminError>;
}

#[async_trait]
pub trait RecentActivityUseCase: Send + Sync {
    async fn execute(&self, params: ActivityParams) -> Result<Vec<ActivityItem>, AdminError>;
}

#[async_trait]
pub trait AnalyticsUseCase: Send + Sync {
    async fn execute(&self, params: DashboardParams) -> Result<Analytics, AdminError>;
}
