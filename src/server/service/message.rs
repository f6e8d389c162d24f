use sea_orm::DatabaseConnection;

use crate::{
    model::message::{render_template, GameMessageDto, TemplateValues},
    server::{
        data::message::MessageRepository,
        error::AppError,
        model::message::{CreateMessageParams, Message, UpdateMessageParams},
    },
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Message>, AppError> {
        let repo = MessageRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_key(&self, message_key: &str) -> Result<Message, AppError> {
        let repo = MessageRepository::new(self.db);

        repo.get_by_key(message_key)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, AppError> {
        let repo = MessageRepository::new(self.db);

        if repo.key_exists(&params.message_key).await? {
            return Err(AppError::BadRequest(
                "A message with this key already exists".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn update(&self, params: UpdateMessageParams) -> Result<Message, AppError> {
        let repo = MessageRepository::new(self.db);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    /// Deletes a message and returns it as it was before deletion.
    pub async fn delete(&self, message_key: &str) -> Result<Message, AppError> {
        let repo = MessageRepository::new(self.db);

        let message = self.get_by_key(message_key).await?;

        if !repo.delete(message_key).await? {
            return Err(AppError::NotFound("Message not found".to_string()));
        }

        Ok(message)
    }

    /// Fills a message template for display in game.
    ///
    /// # Returns
    /// - `Ok(GameMessageDto)` - Rendered content alongside the stored template
    /// - `Err(AppError::NotFound)` - No message has this key
    pub async fn render_for_game(
        &self,
        message_key: &str,
        values: &TemplateValues,
    ) -> Result<GameMessageDto, AppError> {
        let message = self.get_by_key(message_key).await?;

        Ok(GameMessageDto {
            message_key: message.message_key,
            content: render_template(&message.content, values),
            original_content: message.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn renders_game_message_with_placeholders() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::message::MessageFactory::new(db)
            .message_key("join")
            .content("&a%%s joined {0} as {rank} ({1})")
            .build()
            .await
            .unwrap();

        let service = MessageService::new(db);
        let rendered = service
            .render_for_game(
                "join",
                &TemplateValues {
                    player_name: Some("Steve".to_string()),
                    rank: Some("Gold".to_string()),
                    positional: vec!["Lobby".to_string(), "3/20".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(rendered.message_key, "join");
        assert_eq!(rendered.content, "&aSteve joined Lobby as Gold (3/20)");
        assert_eq!(rendered.original_content, "&a%%s joined {0} as {rank} ({1})");
    }

    #[tokio::test]
    async fn rejects_duplicate_key() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = MessageService::new(db);

        let params = CreateMessageParams {
            message_key: "quit".to_string(),
            content: "Bye".to_string(),
            description: String::new(),
        };
        service.create(params.clone()).await.unwrap();

        let result = service.create(params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn missing_key_is_not_found() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = MessageService::new(db);

        assert!(matches!(
            service.render_for_game("nope", &TemplateValues::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete("nope").await,
            Err(AppError::NotFound(_))
        ));
    }
}
