use sea_orm_migration::prelude::*;

use crate::m20261001_000001_create_users_table::Users;
use crate::m20261001_000003_create_vendors_table::Vendors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bookings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bookings::CustomerId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::VendorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Bookings::ServiceName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::ServiceCategory)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::BookingDate).date().not_null())
                    .col(ColumnDef::new(Bookings::EndDate).date())
                    .col(ColumnDef::new(Bookings::StartTime).string_len(5))
                    .col(ColumnDef::new(Bookings::EndTime).string_len(5))
                    .col(ColumnDef::new(Bookings::Venue).text())
                    .col(ColumnDef::new(Bookings::GuestCount).integer())
                    .col(
                        ColumnDef::new(Bookings::TotalAmount)
                            .double()
                            .not_null()
                            .check(Expr::col(Bookings::TotalAmount).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Bookings::Currency)
                            .string_len(3)
                            .not_null()
                            .default("LKR"),
                    )
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Bookings::Status).is_in([
                                "pending",
                                "confirmed",
                                "in_progress",
                                "completed",
                                "cancelled",
                            ])),
                    )
                    .col(
                        ColumnDef::new(Bookings::PaymentStatus)
                            .string_len(20)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Bookings::PaymentStatus).is_in([
                                "pending", "partial", "paid", "refunded",
                            ])),
                    )
                    .col(
                        ColumnDef::new(Bookings::PaidAmount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Bookings::RemainingAmount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Bookings::Packages)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Bookings::SpecialRequirements).text())
                    .col(ColumnDef::new(Bookings::Notes).text())
                    .col(ColumnDef::new(Bookings::CancellationReason).text())
                    .col(ColumnDef::new(Bookings::CancelledAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Bookings::CancelledBy).uuid())
                    .col(ColumnDef::new(Bookings::CompletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Bookings::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_customer_id")
                            .from(Bookings::Table, Bookings::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_vendor_id")
                            .from(Bookings::Table, Bookings::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_customer_date
                ON bookings (customer_id, booking_date)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_vendor_date
                ON bookings (vendor_id, booking_date)
                WHERE is_active = true;
                "#,
            )
            .await?;

        // Revenue on the admin dashboard
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_paid
                ON bookings (created_at)
                WHERE payment_status = 'paid';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_bookings_updated_at
                BEFORE UPDATE ON bookings
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_bookings_updated_at ON bookings")
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    CustomerId,
    VendorId,
    ServiceName,
    ServiceCategory,
    BookingDate,
    EndDate,
    StartTime,
    EndTime,
    Venue,
    GuestCount,
    TotalAmount,
    Currency,
    Status,
    PaymentStatus,
    PaidAmount,
    RemainingAmount,
    Packages,
    SpecialRequirements,
    Notes,
    CancellationReason,
    CancelledAt,
    CancelledBy,
    CompletedAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
