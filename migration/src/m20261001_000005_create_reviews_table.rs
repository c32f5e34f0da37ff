use sea_orm_migration::prelude::*;

use crate::m20261001_000001_create_users_table::Users;
use crate::m20261001_000003_create_vendors_table::Vendors;
use crate::m20261001_000004_create_bookings_table::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn sub_rating(column: Reviews) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .check(Expr::col(column).between(1, 5))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reviews::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Reviews::CustomerId).uuid().not_null())
                    .col(ColumnDef::new(Reviews::VendorId).uuid().not_null())
                    .col(ColumnDef::new(Reviews::BookingId).uuid().not_null())
                    .col(
                        ColumnDef::new(Reviews::Rating)
                            .integer()
                            .not_null()
                            .check(Expr::col(Reviews::Rating).between(1, 5)),
                    )
                    .col(ColumnDef::new(Reviews::Title).string_len(200))
                    .col(ColumnDef::new(Reviews::Comment).text())
                    .col(
                        ColumnDef::new(Reviews::Images)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Reviews::ServiceCategory).string_len(30))
                    .col(
                        ColumnDef::new(Reviews::Pros)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Reviews::Cons)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Reviews::WouldRecommend).boolean())
                    .col(sub_rating(Reviews::QualityRating))
                    .col(sub_rating(Reviews::ValueRating))
                    .col(sub_rating(Reviews::CommunicationRating))
                    .col(sub_rating(Reviews::TimelinessRating))
                    .col(
                        ColumnDef::new(Reviews::HelpfulCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Reviews::NotHelpfulCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Reviews::VendorResponse).text())
                    .col(ColumnDef::new(Reviews::VendorResponseAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Reviews::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reviews::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Reviews::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Reviews::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Reviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_customer_id")
                            .from(Reviews::Table, Reviews::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_vendor_id")
                            .from(Reviews::Table, Reviews::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_booking_id")
                            .from(Reviews::Table, Reviews::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One live review per booking; a soft-deleted one frees the slot.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_reviews_customer_vendor_booking
                ON reviews (customer_id, vendor_id, booking_id)
                WHERE is_active = true;
                "#,
            )
            .await?;

        // Rating recompute and per-vendor listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_reviews_vendor_published
                ON reviews (vendor_id, created_at DESC)
                WHERE is_active = true AND is_published = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_reviews_updated_at
                BEFORE UPDATE ON reviews
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_reviews_updated_at ON reviews")
            .await?;

        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Reviews {
    Table,
    Id,
    CustomerId,
    VendorId,
    BookingId,
    Rating,
    Title,
    Comment,
    Images,
    ServiceCategory,
    Pros,
    Cons,
    WouldRecommend,
    QualityRating,
    ValueRating,
    CommunicationRating,
    TimelinessRating,
    HelpfulCount,
    NotHelpfulCount,
    VendorResponse,
    VendorResponseAt,
    IsVerified,
    IsPublished,
    PublishedAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
