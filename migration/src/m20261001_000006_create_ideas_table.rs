use sea_orm_migration::prelude::*;

use crate::m20261001_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ideas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ideas::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ideas::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Ideas::Content).text().not_null())
                    .col(ColumnDef::new(Ideas::Excerpt).text())
                    .col(
                        ColumnDef::new(Ideas::IdeaType)
                            .string_len(20)
                            .not_null()
                            .check(Expr::col(Ideas::IdeaType).is_in([
                                "blog_post",
                                "gallery",
                                "user_story",
                                "tutorial",
                                "trend",
                            ])),
                    )
                    .col(ColumnDef::new(Ideas::Category).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Ideas::Tags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Ideas::Images)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Ideas::FeaturedImage).text())
                    .col(ColumnDef::new(Ideas::VideoUrl).text())
                    .col(ColumnDef::new(Ideas::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Ideas::AuthorName).string_len(100).not_null())
                    .col(ColumnDef::new(Ideas::AuthorRole).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Ideas::ViewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ideas::LikeCount)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Ideas::LikeCount).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Ideas::ShareCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Ideas::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Ideas::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Ideas::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Ideas::FeaturedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Ideas::ReadingTime).integer())
                    .col(
                        ColumnDef::new(Ideas::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Ideas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Ideas::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ideas_author_id")
                            .from(Ideas::Table, Ideas::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Trending and latest both read the newest published ideas
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_ideas_published
                ON ideas (created_at DESC)
                WHERE is_published = true AND is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_ideas_category_type
                ON ideas (category, idea_type);
                "#,
            )
            .await?;

        // Tag filter and related ideas: tags @> '["outdoor"]'
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_ideas_tags
                ON ideas USING GIN (tags);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_ideas_updated_at
                BEFORE UPDATE ON ideas
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_ideas_updated_at ON ideas")
            .await?;

        manager
            .drop_table(Table::drop().table(Ideas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ideas {
    Table,
    Id,
    Title,
    Content,
    Excerpt,
    IdeaType,
    Category,
    Tags,
    Images,
    FeaturedImage,
    VideoUrl,
    AuthorId,
    AuthorName,
    AuthorRole,
    ViewCount,
    LikeCount,
    ShareCount,
    IsPublished,
    PublishedAt,
    IsFeatured,
    FeaturedAt,
    ReadingTime,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
