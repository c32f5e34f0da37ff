use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatsPeriod {
    Day,
    Week,
    Month,
    Year,
}

impl StatsPeriod {
    /// Day, month and year start at the calendar boundary (UTC); a week is the last seven days.
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let date = match self {
            StatsPeriod::Day => today,
            StatsPeriod::Week => return now - Duration::days(7),
            StatsPeriod::Month => today.with_day(1).unwrap_or(today),
            StatsPeriod::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        };
        start_of(date)
    }
}

fn start_of(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// Half-open creation window `[from, to)`. Open ends are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| at >= from) && self.to.map_or(true, |to| at < to)
    }
}

/// Query string of `GET /admin/dashboard`. Explicit dates win over `period`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardParams {
    #[param(value_type = Option<String>)]
    pub period: Option<StatsPeriod>,
    /// First day included.
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    pub end_date: Option<NaiveDate>,
}

impl DashboardParams {
    pub fn range(&self, now: DateTime<Utc>) -> Result<DateRange, String> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err("start_date must not be after end_date".into());
            }
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            return Ok(DateRange {
                from: self.start_date.map(start_of),
                to: self
                    .end_date
                    .and_then(|d| d.succ_opt())
                    .map(start_of),
            });
        }

        Ok(match self.period {
            Some(period) => DateRange {
                from: Some(period.start(now)),
                to: None,
            },
            None => DateRange::all_time(),
        })
    }
}

/// Raw figures for one window, as counted by storage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardCounts {
    pub users: u64,
    pub vendors: u64,
    pub ideas: u64,
    pub bookings: u64,
    pub reviews: u64,
    pub inquiries: u64,
    pub pending_vendors: u64,
    pub published_ideas: u64,
    pub completed_bookings: u64,
    pub verified_reviews: u64,
    /// Sum of `total_amount` over paid bookings.
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Overview {
    pub total_users: u64,
    pub total_vendors: u64,
    pub total_ideas: u64,
    pub total_bookings: u64,
    pub total_reviews: u64,
    pub total_inquiries: u64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PendingWork {
    pub pending_vendors: u64,
    pub unpublished_ideas: u64,
    pub pending_bookings: u64,
    pub unverified_reviews: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Completion {
    pub published_ideas: u64,
    pub completed_bookings: u64,
    pub verified_reviews: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub range: DateRange,
    pub overview: Overview,
    pub pending: PendingWork,
    pub completion: Completion,
}

impl DashboardStats {
    pub fn new(range: DateRange, counts: DashboardCounts) -> Self {
        Self {
            range,
            overview: Overview {
                total_users: counts.users,
                total_vendors: counts.vendors,
                total_ideas: counts.ideas,
                total_bookings: counts.bookings,
                total_reviews: counts.reviews,
                total_inquiries: counts.inquiries,
                total_revenue: counts.revenue,
            },
            pending: PendingWork {
                pending_vendors: counts.pending_vendors,
                unpublished_ideas: counts.ideas.saturating_sub(counts.published_ideas),
                pending_bookings: counts.bookings.saturating_sub(counts.completed_bookings),
                unverified_reviews: counts.reviews.saturating_sub(counts.verified_reviews),
            },
            completion: Completion {
                published_ideas: counts.published_ideas,
                completed_bookings: counts.completed_bookings,
                verified_reviews: counts.verified_reviews,
            },
        }
    }
}
