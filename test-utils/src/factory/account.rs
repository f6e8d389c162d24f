//! Account factory for creating test game accounts.
//!
//! The `account` table is owned by the game server; in tests it is created from the
//! entity definition and filled through this factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Base for generated `created` identifiers, shaped like a millisecond timestamp.
const CREATED_BASE: i64 = 1_700_000_000_000;

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db)
///     .name("Steve")
///     .rank("Membro")
///     .last_login(1_700_000_000)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    created: i64,
    name: String,
    rank: Option<String>,
    tag: Option<String>,
    lastlogin: Option<i64>,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - created: `1_700_000_000_000 + id`
    /// - name: `"Player{id}"`
    /// - rank: `Some("Membro")`
    /// - tag: `None`
    /// - lastlogin: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AccountFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            created: CREATED_BASE + id as i64,
            name: format!("Player{}", id),
            rank: Some("Membro".to_string()),
            tag: None,
            lastlogin: None,
        }
    }

    /// Sets the identity column.
    pub fn created(mut self, created: i64) -> Self {
        self.created = created;
        self
    }

    /// Sets the player name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the rank column.
    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    /// Clears the rank column.
    pub fn no_rank(mut self) -> Self {
        self.rank = None;
        self
    }

    /// Sets the tag column.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the last login timestamp.
    pub fn last_login(mut self, lastlogin: i64) -> Self {
        self.lastlogin = Some(lastlogin);
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            created: ActiveValue::Set(self.created),
            name: ActiveValue::Set(self.name),
            rank: ActiveValue::Set(self.rank),
            tag: ActiveValue::Set(self.tag),
            lastlogin: ActiveValue::Set(self.lastlogin),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_account_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Account).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let account = create_account(db).await?;

        assert!(account.name.starts_with("Player"));
        assert_eq!(account.rank.as_deref(), Some("Membro"));
        assert!(account.tag.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_accounts() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Account).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_account(db).await?;
        let second = create_account(db).await?;

        assert_ne!(first.created, second.created);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
