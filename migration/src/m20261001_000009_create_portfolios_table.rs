use sea_orm_migration::prelude::*;

use crate::m20261001_000003_create_vendors_table::Vendors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Portfolios::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Portfolios::VendorId).uuid().not_null())
                    .col(ColumnDef::new(Portfolios::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Portfolios::Description).text())
                    .col(ColumnDef::new(Portfolios::Category).string_len(50))
                    .col(
                        ColumnDef::new(Portfolios::Tags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Portfolios::Items)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Portfolios::ProjectDate).date())
                    .col(ColumnDef::new(Portfolios::Venue).string_len(200))
                    .col(ColumnDef::new(Portfolios::ClientName).string_len(150))
                    .col(ColumnDef::new(Portfolios::Budget).double())
                    .col(ColumnDef::new(Portfolios::Duration).string_len(100))
                    .col(ColumnDef::new(Portfolios::TeamSize).integer())
                    .col(ColumnDef::new(Portfolios::Challenges).text())
                    .col(ColumnDef::new(Portfolios::Solutions).text())
                    .col(ColumnDef::new(Portfolios::Testimonials).text())
                    .col(
                        ColumnDef::new(Portfolios::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Portfolios::ViewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Portfolios::LikeCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Portfolios::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_vendor_id")
                            .from(Portfolios::Table, Portfolios::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Vendor page and owner listing, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolios_vendor_created
                ON portfolios (vendor_id, created_at DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolios_tags
                ON portfolios USING GIN (tags);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolios_updated_at
                BEFORE UPDATE ON portfolios
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_portfolios_updated_at ON portfolios")
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Portfolios {
    Table,
    Id,
    VendorId,
    Title,
    Description,
    Category,
    Tags,
    Items,
    ProjectDate,
    Venue,
    ClientName,
    Budget,
    Duration,
    TeamSize,
    Challenges,
    Solutions,
    Testimonials,
    IsFeatured,
    ViewCount,
    LikeCount,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
