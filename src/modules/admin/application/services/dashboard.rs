use async_trait::async_trait;
use chrono::Utc;

use crate::modules::admin::application::domain::{
    latest_activity, ActivityItem, ActivityParams, Analytics, DashboardParams, DashboardStats,
    ACTIVITY_PER_KIND,
};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, AnalyticsUseCase, DashboardUseCase, RecentActivityUseCase,
};
use crate::modules::admin::application::ports::outgoing::{DashboardQuery, DashboardQueryError};

const TOP_VENDORS: u64 = 10;

fn query_error(e: DashboardQueryError) -> AdminError {
    AdminError::Repository(e.to_string())
}

pub struct DashboardService<D>
where
    D: DashboardQuery,
{
    query: D,
}

impl<D> DashboardService<D>
where
    D: DashboardQuery,
{
    pub fn new(query: D) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<D> DashboardUseCase for DashboardService<D>
where
    D: DashboardQuery + Send + Sync,
{
    async fn execute(&self, params: DashboardParams) -> Result<DashboardStats, AdminError> {
        let range = params.range(Utc::now()).map_err(AdminError::Validation)?;

        let counts = self
            .query
            .counts(range)
            .await
            .map_err(query_error)?;

        Ok(DashboardStats::new(range, counts))
    }
}

// =====================================================
// Recent activity
// =====================================================

pub struct RecentActivityService<D>
where
    D: DashboardQuery,
{
    query: D,
}

impl<D> RecentActivityService<D>
where
    D: DashboardQuery,
{
    pub fn new(query: D) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<D> RecentActivityUseCase for RecentActivityService<D>
where
    D: DashboardQuery + Send + Sync,
{
    async fn execute(&self, params: ActivityParams) -> Result<Vec<ActivityItem>, AdminError> {
        let items = self
            .query
            .recent_activity(ACTIVITY_PER_KIND)
            .await
            .map_err(query_error)?;

        Ok(latest_activity(items, params.limit()))
    }
}

// =====================================================
// Analytics
// =====================================================

pub struct AnalyticsService<D>
where
    D: DashboardQuery,
{
    query: D,
}

impl<D> AnalyticsService<D>
where
    D: DashboardQuery,
{
    pub fn new(query: D) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<D> AnalyticsUseCase for AnalyticsService<D>
where
    D: DashboardQuery + Send + Sync,
{
    async fn execute(&self, params: DashboardParams) -> Result<Analytics, AdminError> {
        let range = params.range(Utc::now()).map_err(AdminError::Validation)?;

        let figures = self
            .query
            .analytics(range, TOP_VENDORS)
            .await
            .map_err(query_error)?;

        Ok(Analytics::new(range, figures))
    }
}
