use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::message::{CreateMessageParams, Message, UpdateMessageParams};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every message ordered by key.
    pub async fn get_all(&self) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::Message::find()
            .order_by_asc(entity::message::Column::MessageKey)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }

    pub async fn get_by_key(&self, message_key: &str) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::Message::find()
            .filter(entity::message::Column::MessageKey.eq(message_key))
            .one(self.db)
            .await?;

        Ok(entity.map(Message::from_entity))
    }

    pub async fn key_exists(&self, message_key: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Message::find()
            .filter(entity::message::Column::MessageKey.eq(message_key))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let now = Utc::now();

        let entity = entity::message::ActiveModel {
            message_key: ActiveValue::Set(params.message_key),
            content: ActiveValue::Set(params.content),
            description: ActiveValue::Set(Some(params.description)),
            created_at: ActiveValue::Set(Some(now)),
            updated_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Updates the content and description of the message with the given key.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - The message after the update
    /// - `Ok(None)` - No message has this key
    pub async fn update(&self, params: UpdateMessageParams) -> Result<Option<Message>, DbErr> {
        if !self.key_exists(&params.message_key).await? {
            return Ok(None);
        }

        entity::prelude::Message::update_many()
            .filter(entity::message::Column::MessageKey.eq(params.message_key.as_str()))
            .col_expr(
                entity::message::Column::Content,
                sea_orm::sea_query::Expr::value(params.content),
            )
            .col_expr(
                entity::message::Column::Description,
                sea_orm::sea_query::Expr::value(params.description),
            )
            .col_expr(
                entity::message::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        self.get_by_key(&params.message_key).await
    }

    /// Deletes the message with the given key.
    ///
    /// # Returns
    /// - `Ok(true)` - The message was deleted
    /// - `Ok(false)` - No message has this key
    pub async fn delete(&self, message_key: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::delete_many()
            .filter(entity::message::Column::MessageKey.eq(message_key))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
