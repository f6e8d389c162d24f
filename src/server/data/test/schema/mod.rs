use crate::server::data::schema::AccountSchemaRepository;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use test_utils::builder::TestBuilder;

mod ensure_indexes;
mod ensure_tag_column;
mod missing_columns;

/// Creates an `account` table shaped like the game server's, without the `tag` column.
async fn create_legacy_account_table(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(
        "CREATE TABLE account (
            created BIGINT NOT NULL PRIMARY KEY,
            name VARCHAR(16) NOT NULL,
            rank VARCHAR(32),
            lastlogin BIGINT
        )",
    )
    .await?;
    Ok(())
}
