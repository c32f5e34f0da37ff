use sea_orm_migration::prelude::*;

use crate::m20261001_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create vendors table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vendors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Vendors::UserId).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Vendors::BusinessName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vendors::BusinessDescription).text())
                    .col(
                        ColumnDef::new(Vendors::Categories)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Vendors::District).string_len(50).not_null())
                    .col(ColumnDef::new(Vendors::City).string_len(100))
                    .col(ColumnDef::new(Vendors::Address).text())
                    .col(ColumnDef::new(Vendors::Phone).string_len(20))
                    .col(ColumnDef::new(Vendors::Website).text())
                    .col(ColumnDef::new(Vendors::Facebook).text())
                    .col(ColumnDef::new(Vendors::Instagram).text())
                    .col(ColumnDef::new(Vendors::LogoUrl).text())
                    .col(ColumnDef::new(Vendors::CoverImageUrl).text())
                    .col(ColumnDef::new(Vendors::PriceMin).double())
                    .col(ColumnDef::new(Vendors::PriceMax).double())
                    .col(ColumnDef::new(Vendors::PriceCurrency).string_len(3))
                    .col(
                        ColumnDef::new(Vendors::Languages)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Vendors::Specializations)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Vendors::ExperienceYears).integer())
                    .col(ColumnDef::new(Vendors::TeamSize).integer())
                    .col(
                        ColumnDef::new(Vendors::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Vendors::Status).is_in([
                                "pending",
                                "approved",
                                "rejected",
                                "suspended",
                            ])),
                    )
                    .col(
                        ColumnDef::new(Vendors::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Vendors::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Vendors::FeaturedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Vendors::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Vendors::ReviewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Vendors::ViewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Vendors::InquiryCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Vendors::BookingCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Vendors::RejectionReason).text())
                    .col(ColumnDef::new(Vendors::ApprovedAt).timestamp_with_time_zone())
                    // May reference a super admin, so no foreign key.
                    .col(ColumnDef::new(Vendors::ApprovedBy).uuid())
                    .col(
                        ColumnDef::new(Vendors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Vendors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Vendors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendors_user_id")
                            .from(Vendors::Table, Vendors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Public listing: approved, active, newest or best rated first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vendors_status_rating
                ON vendors (status, rating DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vendors_district
                ON vendors (district);
                "#,
            )
            .await?;

        // Containment filter: categories @> '["photography"]'
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vendors_categories
                ON vendors USING GIN (categories);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vendors_featured
                ON vendors (featured_at DESC)
                WHERE is_featured = true AND is_active = true;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_vendors_updated_at
                BEFORE UPDATE ON vendors
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_vendors_updated_at ON vendors")
            .await?;

        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vendors {
    Table,
    Id,
    UserId,
    BusinessName,
    BusinessDescription,
    Categories,
    District,
    City,
    Address,
    Phone,
    Website,
    Facebook,
    Instagram,
    LogoUrl,
    CoverImageUrl,
    PriceMin,
    PriceMax,
    PriceCurrency,
    Languages,
    Specializations,
    ExperienceYears,
    TeamSize,
    Status,
    IsVerified,
    IsFeatured,
    FeaturedAt,
    Rating,
    ReviewCount,
    ViewCount,
    InquiryCount,
    BookingCount,
    RejectionReason,
    ApprovedAt,
    ApprovedBy,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
