use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250101_000001_create_posts_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Posts::Author).string_len(255).not_null())
                    .col(ColumnDef::new(Posts::Category).string_len(64).not_null())
                    .col(ColumnDef::new(Posts::Draft).boolean().not_null().default(true))
                    .col(ColumnDef::new(Posts::Broadcast).boolean().not_null().default(false))
                    .col(ColumnDef::new(Posts::RawContent).text().not_null())
                    .col(ColumnDef::new(Posts::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // 列表查询都按创建时间倒序
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_draft_created_at")
                    .table(Posts::Table)
                    .col(Posts::Draft)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Author,
    Category,
    Draft,
    Broadcast,
    RawContent,
    CreatedAt,
}
