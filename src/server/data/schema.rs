use migration::{Account, ColumnDef, Index, SchemaManager, Table};
use sea_orm::{DatabaseConnection, DbErr};

/// Table owned by the game server that the dashboard reads and extends.
pub const ACCOUNT_TABLE: &str = "account";

/// Columns the game server must already provide.
pub const REQUIRED_ACCOUNT_COLUMNS: [&str; 4] = ["name", "created", "rank", "lastlogin"];

/// Inspects and extends the schema of the `account` table.
pub struct AccountSchemaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountSchemaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn manager(&self) -> SchemaManager<'a> {
        SchemaManager::new(self.db)
    }

    pub async fn table_exists(&self) -> Result<bool, DbErr> {
        self.manager().has_table(ACCOUNT_TABLE).await
    }

    /// Returns the required columns missing from the table, in declaration order.
    pub async fn missing_columns(&self) -> Result<Vec<String>, DbErr> {
        let manager = self.manager();
        let mut missing = Vec::new();

        for column in REQUIRED_ACCOUNT_COLUMNS {
            if !manager.has_column(ACCOUNT_TABLE, column).await? {
                missing.push(column.to_string());
            }
        }

        Ok(missing)
    }

    /// Adds the nullable `tag` column when it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(true)` - The column was added
    /// - `Ok(false)` - The column already existed
    pub async fn ensure_tag_column(&self) -> Result<bool, DbErr> {
        let manager = self.manager();

        if manager.has_column(ACCOUNT_TABLE, "tag").await? {
            return Ok(false);
        }

        manager
            .alter_table(
                Table::alter()
                    .table(Account::Table)
                    .add_column(ColumnDef::new(Account::Tag).string_len(64).null())
                    .to_owned(),
            )
            .await?;

        Ok(true)
    }

    /// Creates the lookup indexes on `rank`, `lastlogin` and `tag` that are missing.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of indexes created
    pub async fn ensure_indexes(&self) -> Result<usize, DbErr> {
        let manager = self.manager();
        let mut created = 0;

        for (name, column) in [
            ("idx_account_rank", Account::Rank),
            ("idx_account_lastlogin", Account::Lastlogin),
            ("idx_account_tag", Account::Tag),
        ] {
            if manager.has_index(ACCOUNT_TABLE, name).await? {
                continue;
            }

            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Account::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
            created += 1;
        }

        Ok(created)
    }
}
