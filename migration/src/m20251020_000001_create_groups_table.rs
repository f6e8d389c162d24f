use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The dashboard may be pointed at a database that already carries this table.
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(pk_auto(Groups::Id))
                    .col(string_len_uniq(Groups::InternalName, 32))
                    .col(string_len(Groups::DisplayName, 64))
                    .col(string_len_null(Groups::Prefix, 64))
                    .col(string_len_null(Groups::Visualization, 64))
                    .col(text_null(Groups::Permissions))
                    .col(
                        timestamp_with_time_zone_null(Groups::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone_null(Groups::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Groups {
    Table,
    Id,
    InternalName,
    DisplayName,
    Prefix,
    Visualization,
    Permissions,
    CreatedAt,
    UpdatedAt,
}
