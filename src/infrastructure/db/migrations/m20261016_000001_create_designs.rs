use sea_orm::{
    DbErr, DeriveIden, DeriveMigrationName,
    prelude::Expr,
    sea_query::{ColumnDef, Index, Table},
};
use sea_orm_migration::{MigrationTrait, SchemaManager, async_trait::async_trait};

#[derive(DeriveIden)]
pub enum Designs {
    Table,
    Id,
    Code,
    ProductId,
    Svg,
    StateJson,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Designs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Designs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Designs::Code).string_len(24).not_null())
                    .col(ColumnDef::new(Designs::ProductId).string_len(255).not_null())
                    .col(ColumnDef::new(Designs::Svg).text().not_null())
                    .col(ColumnDef::new(Designs::StateJson).text())
                    .col(
                        ColumnDef::new(Designs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index doubles as the point-lookup index for codes.
        manager
            .create_index(
                Index::create()
                    .name("idx_designs_code")
                    .table(Designs::Table)
                    .col(Designs::Code)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Designs::Table).to_owned())
            .await
    }
}
