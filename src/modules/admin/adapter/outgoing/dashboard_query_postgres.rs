use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Statement, Value,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::application::domain::{
    ActivityItem, ActivityKind, AnalyticsFigures, CategoryShare, DailyCount, DailyRevenue,
    DashboardCounts, DateRange, TopVendor,
};
use crate::modules::admin::application::ports::outgoing::{DashboardQuery, DashboardQueryError};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::modules::bookings::adapter::outgoing::sea_orm_entity::bookings::{
    Column as BookingColumn, Entity as BookingEntity,
};
use crate::modules::bookings::application::domain::{BookingStatus, PaymentStatus};
use crate::modules::ideas::adapter::outgoing::sea_orm_entity::ideas::{
    Column as IdeaColumn, Entity as IdeaEntity,
};
use crate::modules::inquiries::adapter::outgoing::sea_orm_entity::inquiries::{
    Column as InquiryColumn, Entity as InquiryEntity,
};
use crate::modules::reviews::adapter::outgoing::sea_orm_entity::reviews::{
    Column as ReviewColumn, Entity as ReviewEntity,
};
use crate::modules::vendors::adapter::outgoing::sea_orm_entity::vendors::{
    Column as VendorColumn, Entity as VendorEntity,
};
use crate::modules::vendors::application::domain::VendorStatus;

/// Restricts a query to rows created inside `range`.
fn within<E, C>(query: Select<E>, created_at: C, range: DateRange) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    let mut query = query;
    if let Some(from) = range.from {
        query = query.filter(created_at.gte(from.fixed_offset()));
    }
    if let Some(to) = range.to {
        query = query.filter(created_at.lt(to.fixed_offset()));
    }
    query
}

#[derive(Debug, FromQueryResult)]
struct RevenueRow {
    revenue: Option<f64>,
}

fn creation_day() -> SimpleExpr {
    Expr::cust("(created_at AT TIME ZONE 'UTC')::date")
}

/// Groups `query` by UTC creation day, oldest first.
fn per_day<E: EntityTrait>(query: Select<E>) -> Select<E> {
    query
        .select_only()
        .column_as(creation_day(), "day")
        .column_as(Expr::cust("COUNT(*)"), "count")
        .group_by(creation_day())
        .order_by_asc(creation_day())
}

fn unsigned(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}

#[derive(Debug, FromQueryResult)]
struct DayCountRow {
    day: NaiveDate,
    count: i64,
}

impl From<DayCountRow> for DailyCount {
    fn from(row: DayCountRow) -> Self {
        DailyCount {
            date: row.day,
            count: unsigned(row.count),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct DayRevenueRow {
    day: NaiveDate,
    count: i64,
    revenue: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct TopVendorRow {
    vendor_id: Uuid,
    business_name: String,
    rating: f64,
    review_count: i32,
    total_revenue: f64,
    total_bookings: i64,
}

#[derive(Debug, FromQueryResult)]
struct CategoryRow {
    category: String,
    vendors: i64,
}

const TOP_VENDORS_SQL: &str = r#"
SELECT v.id AS vendor_id, v.business_name, v.rating, v.review_count,
       COALESCE(SUM(b.total_amount), 0)::float8 AS total_revenue,
       COUNT(b.id) AS total_bookings
FROM vendors v
LEFT JOIN bookings b ON b.vendor_id = v.id AND b.is_active = TRUE
WHERE v.is_active = TRUE AND v.status = $1
GROUP BY v.id
ORDER BY total_revenue DESC, v.id
LIMIT $2
"#;

const CATEGORY_SPREAD_SQL: &str = r#"
SELECT c.category, COUNT(*) AS vendors
FROM vendors v, jsonb_array_elements_text(v.categories) AS c(category)
WHERE v.is_active = TRUE AND v.status = $1
GROUP BY c.category
ORDER BY vendors DESC, c.category
"#;

#[derive(Clone, Debug)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> DashboardQueryError {
    DashboardQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl DashboardQuery for DashboardQueryPostgres {
    async fn counts(&self, range: DateRange) -> Result<DashboardCounts, DashboardQueryError> {
        let db = &*self.db;

        let users = within(
            UserEntity::find().filter(UserColumn::IsActive.eq(true)),
            UserColumn::CreatedAt,
            range,
        );
        let vendors = within(
            VendorEntity::find().filter(VendorColumn::IsActive.eq(true)),
            VendorColumn::CreatedAt,
            range,
        );
        let ideas = within(
            IdeaEntity::find().filter(IdeaColumn::IsActive.eq(true)),
            IdeaColumn::CreatedAt,
            range,
        );
        let bookings = within(
            BookingEntity::find().filter(BookingColumn::IsActive.eq(true)),
            BookingColumn::CreatedAt,
            range,
        );
        let reviews = within(
            ReviewEntity::find().filter(ReviewColumn::IsActive.eq(true)),
            ReviewColumn::CreatedAt,
            range,
        );
        let inquiries = within(
            InquiryEntity::find().filter(InquiryColumn::IsActive.eq(true)),
            InquiryColumn::CreatedAt,
            range,
        );

        let mut counts = DashboardCounts {
            users: users.count(db).await.map_err(map_db_err)?,
            vendors: vendors.clone().count(db).await.map_err(map_db_err)?,
            ideas: ideas.clone().count(db).await.map_err(map_db_err)?,
            bookings: bookings.clone().count(db).await.map_err(map_db_err)?,
            reviews: reviews.clone().count(db).await.map_err(map_db_err)?,
            inquiries: inquiries.count(db).await.map_err(map_db_err)?,
            ..Default::default()
        };

        counts.pending_vendors = vendors
            .filter(VendorColumn::Status.eq(VendorStatus::Pending.as_str()))
            .count(db)
            .await
            .map_err(map_db_err)?;
        counts.published_ideas = ideas
            .filter(IdeaColumn::IsPublished.eq(true))
            .count(db)
            .await
            .map_err(map_db_err)?;
        counts.completed_bookings = bookings
            .clone()
            .filter(BookingColumn::Status.eq(BookingStatus::Completed.as_str()))
            .count(db)
            .await
            .map_err(map_db_err)?;
        counts.verified_reviews = reviews
            .filter(ReviewColumn::IsVerified.eq(true))
            .count(db)
            .await
            .map_err(map_db_err)?;

        counts.revenue = bookings
            .filter(BookingColumn::PaymentStatus.eq(PaymentStatus::Paid.as_str()))
            .select_only()
            .column_as(Expr::col(BookingColumn::TotalAmount).sum(), "revenue")
            .into_model::<RevenueRow>()
            .one(db)
            .await
            .map_err(map_db_err)?
            .and_then(|row| row.revenue)
            .unwrap_or(0.0);

        Ok(counts)
    }

    async fn recent_activity(&self, per_kind: u64) -> Result<Vec<ActivityItem>, DashboardQueryError> {
        let db = &*self.db;
        let mut items = Vec::new();

        let users = UserEntity::find()
            .filter(UserColumn::IsActive.eq(true))
            .order_by_desc(UserColumn::CreatedAt)
            .limit(per_kind)
            .all(db)
            .await
            .map_err(map_db_err)?;
        items.extend(users.into_iter().map(|u| ActivityItem {
            kind: ActivityKind::User,
            id: u.id,
            title: u.name,
            detail: u.role,
            created_at: u.created_at.with_timezone(&Utc),
        }));

        let vendors = VendorEntity::find()
            .filter(VendorColumn::IsActive.eq(true))
            .order_by_desc(VendorColumn::CreatedAt)
            .limit(per_kind)
            .all(db)
            .await
            .map_err(map_db_err)?;
        items.extend(vendors.into_iter().map(|v| ActivityItem {
            kind: ActivityKind::Vendor,
            id: v.id,
            title: v.business_name,
            detail: v.status,
            created_at: v.created_at.with_timezone(&Utc),
        }));

        let ideas = IdeaEntity::find()
            .filter(IdeaColumn::IsActive.eq(true))
            .order_by_desc(IdeaColumn::CreatedAt)
            .limit(per_kind)
            .all(db)
            .await
            .map_err(map_db_err)?;
        items.extend(ideas.into_iter().map(|i| ActivityItem {
            kind: ActivityKind::Idea,
            id: i.id,
            title: i.title,
            detail: i.idea_type,
            created_at: i.created_at.with_timezone(&Utc),
        }));

        let bookings = BookingEntity::find()
            .filter(BookingColumn::IsActive.eq(true))
            .order_by_desc(BookingColumn::CreatedAt)
            .limit(per_kind)
            .all(db)
            .await
            .map_err(map_db_err)?;
        items.extend(bookings.into_iter().map(|b| ActivityItem {
            kind: ActivityKind::Booking,
            id: b.id,
            title: b.service_name,
            detail: b.status,
            created_at: b.created_at.with_timezone(&Utc),
        }));

        Ok(items)
    }

    async fn analytics(
        &self,
        range: DateRange,
        top: u64,
    ) -> Result<AnalyticsFigures, DashboardQueryError> {
        let db = &*self.db;

        let users = per_day(within(
            UserEntity::find().filter(UserColumn::IsActive.eq(true)),
            UserColumn::CreatedAt,
            range,
        ))
        .into_model::<DayCountRow>()
        .all(db)
        .await
        .map_err(map_db_err)?;

        let vendors = per_day(within(
            VendorEntity::find().filter(VendorColumn::IsActive.eq(true)),
            VendorColumn::CreatedAt,
            range,
        ))
        .into_model::<DayCountRow>()
        .all(db)
        .await
        .map_err(map_db_err)?;

        let revenue = per_day(within(
            BookingEntity::find()
                .filter(BookingColumn::IsActive.eq(true))
                .filter(BookingColumn::PaymentStatus.eq(PaymentStatus::Paid.as_str())),
            BookingColumn::CreatedAt,
            range,
        ))
        .column_as(Expr::col(BookingColumn::TotalAmount).sum(), "revenue")
        .into_model::<DayRevenueRow>()
        .all(db)
        .await
        .map_err(map_db_err)?;

        let approved = VendorStatus::Approved.as_str();

        let top_vendors = TopVendorRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            TOP_VENDORS_SQL,
            [Value::from(approved), Value::from(i64::try_from(top).unwrap_or(i64::MAX))],
        ))
        .all(db)
        .await
        .map_err(map_db_err)?;

        let categories = CategoryRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            CATEGORY_SPREAD_SQL,
            [Value::from(approved)],
        ))
        .all(db)
        .await
        .map_err(map_db_err)?;

        Ok(AnalyticsFigures {
            users: users.into_iter().map(DailyCount::from).collect(),
            vendors: vendors.into_iter().map(DailyCount::from).collect(),
            revenue: revenue
                .into_iter()
                .map(|row| DailyRevenue {
                    date: row.day,
                    revenue: row.revenue.unwrap_or(0.0),
                    bookings: unsigned(row.count),
                })
                .collect(),
            top_vendors: top_vendors
                .into_iter()
                .map(|row| TopVendor {
                    vendor_id: row.vendor_id,
                    business_name: row.business_name,
                    rating: row.rating,
                    review_count: row.review_count,
                    total_revenue: row.total_revenue,
                    total_bookings: unsigned(row.total_bookings),
                })
                .collect(),
            categories: categories
                .into_iter()
                .map(|row| CategoryShare {
                    category: row.category,
                    vendors: unsigned(row.vendors),
                })
                .collect(),
        })
    }
}
