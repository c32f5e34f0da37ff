use sea_orm_migration::prelude::*;

use crate::m20261001_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn json_list(column: Plannings) -> ColumnDef {
    ColumnDef::new(column)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

fn progress(column: Plannings) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .default(0)
        .check(Expr::col(column).between(0, 100))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plannings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Plannings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Plannings::UserId).uuid().not_null())
                    .col(ColumnDef::new(Plannings::WeddingDate).date().not_null())
                    .col(ColumnDef::new(Plannings::Venue).text())
                    .col(ColumnDef::new(Plannings::GuestCount).integer())
                    .col(ColumnDef::new(Plannings::Budget).double())
                    .col(ColumnDef::new(Plannings::Style).string_len(100))
                    .col(ColumnDef::new(Plannings::Theme).string_len(100))
                    .col(json_list(Plannings::Colors))
                    .col(ColumnDef::new(Plannings::Notes).text())
                    .col(json_list(Plannings::BudgetItems))
                    .col(json_list(Plannings::Guests))
                    .col(json_list(Plannings::Timeline))
                    .col(json_list(Plannings::Checklist))
                    .col(progress(Plannings::BudgetProgress))
                    .col(progress(Plannings::GuestsProgress))
                    .col(progress(Plannings::TimelineProgress))
                    .col(progress(Plannings::ChecklistProgress))
                    .col(
                        ColumnDef::new(Plannings::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Plannings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Plannings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plannings_user_id")
                            .from(Plannings::Table, Plannings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One active planning document per user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_plannings_user_active
                ON plannings (user_id)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_plannings_updated_at
                BEFORE UPDATE ON plannings
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_plannings_updated_at ON plannings")
            .await?;

        manager
            .drop_table(Table::drop().table(Plannings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Plannings {
    Table,
    Id,
    UserId,
    WeddingDate,
    Venue,
    GuestCount,
    Budget,
    Style,
    Theme,
    Colors,
    Notes,
    BudgetItems,
    Guests,
    Timeline,
    Checklist,
    BudgetProgress,
    GuestsProgress,
    TimelineProgress,
    ChecklistProgress,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
