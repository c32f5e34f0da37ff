use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::bookings::{Column, Entity as BookingEntity, Model as BookingModel};
use crate::modules::bookings::application::domain::{
    Booking, BookingFilter, BookingRef, BookingSort, BookingSortField, BookingStatus,
    PaymentStatus,
};
use crate::modules::bookings::application::ports::outgoing::{
    BookingLookup, BookingLookupError, BookingQuery, BookingQueryError,
};
use crate::modules::vendors::adapter::outgoing::vendor_query_postgres::order_of;
use crate::shared::db::from_json;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::scope::PartyScope;

pub(crate) fn booking_from_model(model: BookingModel) -> Result<Booking, String> {
    Ok(Booking {
        status: model.status.parse::<BookingStatus>()?,
        payment_status: model.payment_status.parse::<PaymentStatus>()?,
        packages: from_json(&model.packages)?,
        id: model.id,
        customer_id: model.customer_id,
        vendor_id: model.vendor_id,
        service_name: model.service_name,
        service_category: model.service_category,
        booking_date: model.booking_date,
        end_date: model.end_date,
        start_time: model.start_time,
        end_time: model.end_time,
        venue: model.venue,
        guest_count: model.guest_count,
        total_amount: model.total_amount,
        currency: model.currency,
        paid_amount: model.paid_amount,
        remaining_amount: model.remaining_amount,
        special_requirements: model.special_requirements,
        notes: model.notes,
        cancellation_reason: model.cancellation_reason,
        cancelled_at: model.cancelled_at.map(|t| t.with_timezone(&Utc)),
        cancelled_by: model.cancelled_by,
        completed_at: model.completed_at.map(|t| t.with_timezone(&Utc)),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

/// Active bookings the scope may see.
pub(crate) fn scoped(scope: PartyScope) -> Select<BookingEntity> {
    let query = BookingEntity::find().filter(Column::IsActive.eq(true));
    match scope {
        PartyScope::All => query,
        PartyScope::Customer(id) => query.filter(Column::CustomerId.eq(id)),
        PartyScope::Vendor(id) => query.filter(Column::VendorId.eq(id)),
    }
}

pub(crate) fn filtered(scope: PartyScope, filter: &BookingFilter) -> Select<BookingEntity> {
    let mut query = scoped(scope);

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::ServiceName).ilike(&pattern))
                .add(Expr::col(Column::Venue).ilike(&pattern))
                .add(Expr::col(Column::Notes).ilike(&pattern))
                .add(Expr::col(Column::SpecialRequirements).ilike(&pattern)),
        );
    }
    if let Some(status) = filter.status {
        query = query.filter(Column::Status.eq(status.as_str()));
    }
    if let Some(payment) = filter.payment_status {
        query = query.filter(Column::PaymentStatus.eq(payment.as_str()));
    }
    if let Some(category) = &filter.service_category {
        query = query.filter(Column::ServiceCategory.eq(category.as_str()));
    }
    if let Some(start) = filter.start_date {
        query = query.filter(Column::BookingDate.gte(start));
    }
    if let Some(end) = filter.end_date {
        query = query.filter(Column::BookingDate.lte(end));
    }

    query
}

#[derive(Debug, FromQueryResult)]
struct StatusCount {
    status: String,
    count: i64,
}

#[derive(Clone, Debug)]
pub struct BookingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> BookingQueryError {
    BookingQueryError::DatabaseError(e.to_string())
}

fn to_bookings(models: Vec<BookingModel>) -> Result<Vec<Booking>, BookingQueryError> {
    models
        .into_iter()
        .map(booking_from_model)
        .collect::<Result<Vec<_>, _>>()
        .map_err(BookingQueryError::DatabaseError)
}

#[async_trait]
impl BookingQuery for BookingQueryPostgres {
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, BookingQueryError> {
        scoped(PartyScope::All)
            .filter(Column::Id.eq(booking_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(booking_from_model)
            .transpose()
            .map_err(BookingQueryError::DatabaseError)
    }

    async fn list(
        &self,
        scope: PartyScope,
        filter: BookingFilter,
        sort: BookingSort,
        page: PageRequest,
    ) -> Result<PageResult<Booking>, BookingQueryError> {
        let column = match sort.field {
            BookingSortField::BookingDate => Column::BookingDate,
            BookingSortField::CreatedAt => Column::CreatedAt,
            BookingSortField::TotalAmount => Column::TotalAmount,
        };

        let query = filtered(scope, &filter)
            .order_by(column, order_of(sort.order))
            .order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(to_bookings(models)?, page, total))
    }

    async fn status_counts(
        &self,
        scope: PartyScope,
    ) -> Result<Vec<(BookingStatus, u64)>, BookingQueryError> {
        let rows = scoped(scope)
            .select_only()
            .column(Column::Status)
            .column_as(Expr::col(Column::Id).count(), "count")
            .group_by(Column::Status)
            .into_model::<StatusCount>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| {
                let status = row
                    .status
                    .parse::<BookingStatus>()
                    .map_err(BookingQueryError::DatabaseError)?;
                Ok((status, row.count.max(0) as u64))
            })
            .collect()
    }

    async fn upcoming(
        &self,
        scope: PartyScope,
        from: NaiveDate,
        limit: u64,
    ) -> Result<Vec<Booking>, BookingQueryError> {
        let models = scoped(scope)
            .filter(Column::BookingDate.gte(from))
            .filter(Column::Status.is_in([
                BookingStatus::Confirmed.as_str(),
                BookingStatus::InProgress.as_str(),
            ]))
            .order_by_asc(Column::BookingDate)
            .order_by_asc(Column::StartTime)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_bookings(models)
    }
}

#[async_trait]
impl BookingLookup for BookingQueryPostgres {
    async fn find_active(&self, booking_id: Uuid) -> Result<Option<BookingRef>, BookingLookupError> {
        let model = scoped(PartyScope::All)
            .filter(Column::Id.eq(booking_id))
            .one(&*self.db)
            .await
            .map_err(|e| BookingLookupError::DatabaseError(e.to_string()))?;

        model
            .map(|m| {
                Ok(BookingRef {
                    status: m
                        .status
                        .parse::<BookingStatus>()
                        .map_err(BookingLookupError::DatabaseError)?,
                    id: m.id,
                    customer_id: m.customer_id,
                    vendor_id: m.vendor_id,
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::SortOrder;
    use crate::tests::support::fixtures::booking_model;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[test]
    fn customer_scope_filters_on_customer() {
        let customer = Uuid::new_v4();
        let sql = scoped(PartyScope::Customer(customer))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""customer_id" = "#));
        assert!(sql.contains(r#""is_active" = TRUE"#));
        assert!(!sql.contains(r#""vendor_id" = "#));
    }

    #[test]
    fn search_spans_text_columns() {
        let filter = BookingFilter {
            search: Some("garden".into()),
            ..Default::default()
        };
        let sql = filtered(PartyScope::All, &filter)
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""venue" ILIKE '%garden%'"#));
        assert!(sql.contains(r#""special_requirements" ILIKE"#));
    }

    #[tokio::test]
    async fn find_by_id_maps_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![booking_model(id, Uuid::new_v4(), Uuid::new_v4())]])
            .into_connection();

        let booking = BookingQueryPostgres::new(Arc::new(db))
            .find_by_id(id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(booking.id, id);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.packages.len(), 1);
    }

    #[tokio::test]
    async fn list_counts_then_pages() {
        let customer = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(3)]])
            .append_query_results([vec![booking_model(Uuid::new_v4(), customer, Uuid::new_v4())]])
            .into_connection();

        let page = BookingQueryPostgres::new(Arc::new(db))
            .list(
                PartyScope::Customer(customer),
                BookingFilter::default(),
                BookingSort {
                    field: BookingSortField::TotalAmount,
                    order: SortOrder::Asc,
                },
                PageRequest::new(Some(1), Some(1)),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn status_counts_parse_groups() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                BTreeMap::from([
                    ("status", Value::from("pending")),
                    ("count", Value::BigInt(Some(2))),
                ]),
                BTreeMap::from([
                    ("status", Value::from("completed")),
                    ("count", Value::BigInt(Some(5))),
                ]),
            ]])
            .into_connection();

        let counts = BookingQueryPostgres::new(Arc::new(db))
            .status_counts(PartyScope::All)
            .await
            .unwrap();

        assert_eq!(
            counts,
            vec![(BookingStatus::Pending, 2), (BookingStatus::Completed, 5)]
        );
    }

    #[tokio::test]
    async fn lookup_returns_booking_ref() {
        let id = Uuid::new_v4();
        let vendor_id = Uuid::new_v4();
        let mut model = booking_model(id, Uuid::new_v4(), vendor_id);
        model.status = "completed".into();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model]])
            .into_connection();

        let found = BookingQueryPostgres::new(Arc::new(db))
            .find_active(id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.vendor_id, vendor_id);
        assert_eq!(found.status, BookingStatus::Completed);
    }
}
