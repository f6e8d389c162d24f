//! Message template domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::message::{CreateMessageDto, MessageDto, MessageKeyDto, UpdateMessageDto};

/// Chat or system message template stored in the `messages` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub message_key: String,
    pub content: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            message_key: entity.message_key,
            content: entity.content,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            message_key: self.message_key,
            content: self.content,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_key_dto(self) -> MessageKeyDto {
        MessageKeyDto {
            key: self.message_key,
            description: self.description,
        }
    }
}

/// Parameters for creating a message. A missing description is stored as empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMessageParams {
    pub message_key: String,
    pub content: String,
    pub description: String,
}

impl CreateMessageParams {
    pub fn from_dto(dto: CreateMessageDto) -> Self {
        Self {
            message_key: dto.message_key,
            content: dto.content,
            description: dto.description.unwrap_or_default(),
        }
    }
}

/// Parameters for updating a message addressed by its key.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMessageParams {
    pub message_key: String,
    pub content: String,
    pub description: String,
}

impl UpdateMessageParams {
    pub fn from_dto(message_key: String, dto: UpdateMessageDto) -> Self {
        Self {
            message_key,
            content: dto.content,
            description: dto.description.unwrap_or_default(),
        }
    }
}
