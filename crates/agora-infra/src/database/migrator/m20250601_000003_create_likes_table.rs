use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_posts_table::Posts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Likes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Likes::PostId).integer().not_null())
                    .col(ColumnDef::new(Likes::Username).text().not_null())
                    .col(
                        ColumnDef::new(Likes::CreatedAt)
                            .text()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_post_id")
                            .from(Likes::Table, Likes::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One like per user per post
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_likes_post_username_unique")
                    .table(Likes::Table)
                    .col(Likes::PostId)
                    .col(Likes::Username)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Likes {
    Table,
    Id,
    PostId,
    Username,
    CreatedAt,
}
