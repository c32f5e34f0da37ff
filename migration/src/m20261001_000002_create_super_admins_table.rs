use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SuperAdmins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SuperAdmins::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SuperAdmins::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SuperAdmins::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SuperAdmins::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(SuperAdmins::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(SuperAdmins::LastLoginAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(SuperAdmins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SuperAdmins::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_super_admins_updated_at
                BEFORE UPDATE ON super_admins
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
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_super_admins_updated_at ON super_admins",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SuperAdmins::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SuperAdmins {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    IsActive,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
