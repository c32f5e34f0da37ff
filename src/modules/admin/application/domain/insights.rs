use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::dashboard::DateRange;

// =====================================================
// Recent activity
// =====================================================

/// Newest rows fetched per kind before merging.
pub const ACTIVITY_PER_KIND: u64 = 5;
const DEFAULT_ACTIVITY_LIMIT: u64 = 20;
const MAX_ACTIVITY_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    User,
    Vendor,
    Idea,
    Booking,
}

/// One newly created row. `detail` is the user's role, the vendor's or
/// booking's status, or the idea's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub id: Uuid,
    pub title: String,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

/// Query string of `GET /admin/activity`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityParams {
    /// 1 to 100, default 20.
    pub limit: Option<u64>,
}

impl ActivityParams {
    pub fn limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
            .clamp(1, MAX_ACTIVITY_LIMIT) as usize
    }
}

/// Newest first across every kind. Equal timestamps keep their input order.
pub fn latest_activity(mut items: Vec<ActivityItem>, limit: usize) -> Vec<ActivityItem> {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.truncate(limit);
    items
}

// =====================================================
// Analytics
// =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Paid bookings created on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
    pub bookings: u64,
}

/// An approved vendor ranked by the total amount of its bookings.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TopVendor {
    pub vendor_id: Uuid,
    pub business_name: String,
    pub rating: f64,
    pub review_count: i32,
    pub total_revenue: f64,
    pub total_bookings: u64,
}

/// Approved vendors offering `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryShare {
    pub category: String,
    pub vendors: u64,
}

/// Raw series as aggregated by storage, one entry per day with activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsFigures {
    pub users: Vec<DailyCount>,
    pub vendors: Vec<DailyCount>,
    pub revenue: Vec<DailyRevenue>,
    pub top_vendors: Vec<TopVendor>,
    pub categories: Vec<CategoryShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Trends {
    pub users: Vec<DailyCount>,
    pub vendors: Vec<DailyCount>,
    pub revenue: Vec<DailyRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Analytics {
    pub range: DateRange,
    pub trends: Trends,
    pub top_vendors: Vec<TopVendor>,
    pub category_distribution: Vec<CategoryShare>,
}

impl Analytics {
    /// Trend series come out ascending and gap-free between their first and
    /// last day.
    pub fn new(range: DateRange, figures: AnalyticsFigures) -> Self {
        Self {
            range,
            trends: Trends {
                users: contiguous(figures.users, |p| p.date, no_signups),
                vendors: contiguous(figures.vendors, |p| p.date, no_signups),
                revenue: contiguous(figures.revenue, |p| p.date, no_revenue),
            },
            top_vendors: figures.top_vendors,
            category_distribution: figures.categories,
        }
    }
}

fn no_signups(date: NaiveDate) -> DailyCount {
    DailyCount { date, count: 0 }
}

fn no_revenue(date: NaiveDate) -> DailyRevenue {
    DailyRevenue {
        date,
        revenue: 0.0,
        bookings: 0,
    }
}

fn contiguous<T>(
    mut points: Vec<T>,
    date_of: impl Fn(&T) -> NaiveDate,
    empty: impl Fn(NaiveDate) -> T,
) -> Vec<T> {
    points.sort_by_key(&date_of);

    let mut filled: Vec<T> = Vec::with_capacity(points.len());
    for point in points {
        let target = date_of(&point);
        let mut next = filled.last().and_then(|last| date_of(last).succ_opt());
        while let Some(d) = next.filter(|d| *d < target) {
            filled.push(empty(d));
            next = d.succ_opt();
        }
        filled.push(point);
    }
    filled
}
