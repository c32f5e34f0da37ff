use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::booking_query_postgres::booking_from_model;
use super::sea_orm_entity::bookings::{
    ActiveModel as BookingActiveModel, Column, Entity as BookingEntity, Model as BookingModel,
};
use crate::modules::bookings::application::domain::{
    Booking, BookingStatus, NewBooking, PaymentStatus,
};
use crate::modules::bookings::application::ports::outgoing::{
    BookingRepository, BookingRepositoryError,
};
use crate::modules::vendors::adapter::outgoing::sea_orm_entity::vendors::{
    Column as VendorColumn, Entity as VendorEntity,
};
use crate::shared::db::to_json;

#[derive(Clone, Debug)]
pub struct BookingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: BookingModel) -> Result<Booking, BookingRepositoryError> {
        booking_from_model(model).map_err(BookingRepositoryError::DatabaseError)
    }
}

fn map_db_err(e: DbErr) -> BookingRepositoryError {
    BookingRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl BookingRepository for BookingRepositoryPostgres {
    async fn create(&self, booking: NewBooking) -> Result<Booking, BookingRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = BookingActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(booking.customer_id),
            vendor_id: Set(booking.vendor_id),
            service_name: Set(booking.service_name),
            service_category: Set(booking.service_category),
            booking_date: Set(booking.booking_date),
            end_date: Set(booking.end_date),
            start_time: Set(booking.start_time),
            end_time: Set(booking.end_time),
            venue: Set(booking.venue),
            guest_count: Set(booking.guest_count),
            total_amount: Set(booking.total_amount),
            currency: Set(booking.currency),
            status: Set(BookingStatus::Pending.as_str().to_string()),
            payment_status: Set(PaymentStatus::Pending.as_str().to_string()),
            paid_amount: Set(0.0),
            remaining_amount: Set(booking.total_amount),
            packages: Set(
                to_json(&booking.packages).map_err(BookingRepositoryError::DatabaseError)?,
            ),
            special_requirements: Set(booking.special_requirements),
            notes: Set(booking.notes),
            cancellation_reason: Set(None),
            cancelled_at: Set(None),
            cancelled_by: Set(None),
            completed_at: Set(None),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = active.insert(&txn).await.map_err(map_db_err)?;

        VendorEntity::update_many()
            .col_expr(
                VendorColumn::BookingCount,
                Expr::col(VendorColumn::BookingCount).add(1),
            )
            .filter(VendorColumn::Id.eq(inserted.vendor_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Self::to_domain(inserted)
    }

    async fn save(&self, booking: &Booking) -> Result<Booking, BookingRepositoryError> {
        let active = BookingActiveModel {
            id: sea_orm::ActiveValue::Unchanged(booking.id),
            status: Set(booking.status.as_str().to_string()),
            payment_status: Set(booking.payment_status.as_str().to_string()),
            paid_amount: Set(booking.paid_amount),
            remaining_amount: Set(booking.remaining_amount),
            notes: Set(booking.notes.clone()),
            cancellation_reason: Set(booking.cancellation_reason.clone()),
            cancelled_at: Set(booking.cancelled_at.map(|t| t.fixed_offset())),
            cancelled_by: Set(booking.cancelled_by),
            completed_at: Set(booking.completed_at.map(|t| t.fixed_offset())),
            venue: Set(booking.venue.clone()),
            guest_count: Set(booking.guest_count),
            special_requirements: Set(booking.special_requirements.clone()),
            updated_at: Set(booking.updated_at.fixed_offset()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => BookingRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Self::to_domain(updated)
    }

    async fn soft_delete(&self, booking_id: Uuid) -> Result<(), BookingRepositoryError> {
        let result = BookingEntity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(booking_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BookingRepositoryError::NotFound);
        }
        Ok(())
    }
}
