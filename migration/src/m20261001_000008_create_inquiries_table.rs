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
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Inquiries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Inquiries::CustomerId).uuid().not_null())
                    .col(ColumnDef::new(Inquiries::VendorId).uuid().not_null())
                    .col(ColumnDef::new(Inquiries::Subject).string_len(200).not_null())
                    .col(ColumnDef::new(Inquiries::Message).text().not_null())
                    .col(
                        ColumnDef::new(Inquiries::Attachments)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Inquiries::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Inquiries::Status).is_in([
                                "pending", "replied", "closed",
                            ])),
                    )
                    .col(
                        ColumnDef::new(Inquiries::Messages)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Inquiries::WeddingDate).date())
                    .col(ColumnDef::new(Inquiries::GuestCount).integer())
                    .col(ColumnDef::new(Inquiries::Budget).double())
                    .col(ColumnDef::new(Inquiries::Venue).text())
                    .col(ColumnDef::new(Inquiries::SpecialRequirements).text())
                    .col(ColumnDef::new(Inquiries::PreferredContactMethod).string_len(20))
                    .col(ColumnDef::new(Inquiries::Urgency).string_len(10))
                    .col(
                        ColumnDef::new(Inquiries::LastMessageAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Inquiries::ClosedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Inquiries::ClosedBy).uuid())
                    .col(ColumnDef::new(Inquiries::ClosedReason).text())
                    .col(
                        ColumnDef::new(Inquiries::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Inquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Inquiries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiries_customer_id")
                            .from(Inquiries::Table, Inquiries::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiries_vendor_id")
                            .from(Inquiries::Table, Inquiries::VendorId)
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
                CREATE INDEX IF NOT EXISTS idx_inquiries_customer_last_message
                ON inquiries (customer_id, last_message_at DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_inquiries_vendor_last_message
                ON inquiries (vendor_id, last_message_at DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_inquiries_updated_at
                BEFORE UPDATE ON inquiries
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_inquiries_updated_at ON inquiries")
            .await?;

        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Id,
    CustomerId,
    VendorId,
    Subject,
    Message,
    Attachments,
    Status,
    Messages,
    WeddingDate,
    GuestCount,
    Budget,
    Venue,
    SpecialRequirements,
    PreferredContactMethod,
    Urgency,
    LastMessageAt,
    ClosedAt,
    ClosedBy,
    ClosedReason,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
