use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::schema::{AccountSchemaRepository, ACCOUNT_TABLE},
    error::{schema::SchemaError, AppError},
};

/// Prepares the game server's `account` table for use by the dashboard.
pub struct AccountSchemaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountSchemaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies the required columns, then adds the `tag` column and lookup indexes.
    ///
    /// # Returns
    /// - `Ok(())` - The table is ready
    /// - `Err(AppError::SchemaErr)` - The table or a required column is missing
    /// - `Err(AppError::DbErr)` - Inspecting or altering the schema failed
    pub async fn prepare(&self) -> Result<(), AppError> {
        let repo = AccountSchemaRepository::new(self.db);

        if !repo.table_exists().await? {
            return Err(SchemaError::MissingTable(ACCOUNT_TABLE.to_string()).into());
        }

        let missing = repo.missing_columns().await?;
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns {
                table: ACCOUNT_TABLE.to_string(),
                columns: missing,
            }
            .into());
        }

        if repo.ensure_tag_column().await? {
            tracing::info!("Added tag column to the account table");
        }

        let indexes = repo.ensure_indexes().await?;
        if indexes > 0 {
            tracing::info!("Created {} index(es) on the account table", indexes);
        }

        tracing::info!("Account table schema verified");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn fails_without_account_table() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AccountSchemaService::new(db).prepare().await;

        assert!(matches!(
            result,
            Err(AppError::SchemaErr(SchemaError::MissingTable(_)))
        ));
    }

    #[tokio::test]
    async fn fails_when_required_columns_are_missing() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        db.execute_unprepared("CREATE TABLE account (created BIGINT PRIMARY KEY, name TEXT, rank TEXT)")
            .await
            .unwrap();

        let result = AccountSchemaService::new(db).prepare().await;

        match result {
            Err(AppError::SchemaErr(SchemaError::MissingColumns { columns, .. })) => {
                assert_eq!(columns, vec!["lastlogin".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn extends_a_valid_table_and_is_repeatable() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        db.execute_unprepared(
            "CREATE TABLE account (created BIGINT PRIMARY KEY, name TEXT, rank TEXT, lastlogin BIGINT)",
        )
        .await
        .unwrap();

        let service = AccountSchemaService::new(db);

        service.prepare().await.unwrap();
        service.prepare().await.unwrap();

        assert!(AccountSchemaRepository::new(db)
            .ensure_tag_column()
            .await
            .map(|added| !added)
            .unwrap());
    }
}
