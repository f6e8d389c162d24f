//! Message factory for creating test message templates.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message::MessageFactory;
///
/// let message = MessageFactory::new(&db)
///     .message_key("welcome")
///     .content("&aWelcome %%s!")
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    message_key: String,
    content: String,
    description: Option<String>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - message_key: `"message.{id}"`
    /// - content: `"&7Message {id}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            message_key: format!("message.{}", id),
            content: format!("&7Message {}", id),
            description: None,
        }
    }

    /// Sets the unique message key.
    pub fn message_key(mut self, message_key: impl Into<String>) -> Self {
        self.message_key = message_key.into();
        self
    }

    /// Sets the template content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        let now = Utc::now();
        entity::message::ActiveModel {
            id: ActiveValue::NotSet,
            message_key: ActiveValue::Set(self.message_key),
            content: ActiveValue::Set(self.content),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Some(now)),
            updated_at: ActiveValue::Set(Some(now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values.
///
/// Shorthand for `MessageFactory::new(db).build().await`.
pub async fn create_message(db: &DatabaseConnection) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_message_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Message).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let message = create_message(db).await?;

        assert!(message.message_key.starts_with("message."));
        assert!(message.description.is_none());

        Ok(())
    }
}
