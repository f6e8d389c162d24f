use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MessageDto {
    pub id: i32,
    pub message_key: String,
    pub content: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateMessageDto {
    #[serde(default)]
    pub message_key: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateMessageDto {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A message template with its placeholders filled in for in-game use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GameMessageDto {
    pub message_key: String,
    pub content: String,
    pub original_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MessageKeyDto {
    pub key: String,
    pub description: Option<String>,
}

/// Placeholder replaced by the player name.
pub const PLAYER_PLACEHOLDER: &str = "%%s";
/// Placeholder replaced by the player rank.
pub const RANK_PLACEHOLDER: &str = "{rank}";

/// Values substituted into a message template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateValues {
    pub player_name: Option<String>,
    pub rank: Option<String>,
    /// Values for `{0}`, `{1}`, ... in order.
    pub positional: Vec<String>,
}

/// Fills a message template.
///
/// Every `%%s` becomes the player name and every `{rank}` the rank, when given. The
/// positional values then replace `{0}`, `{1}`, ... by index. Placeholders without a
/// value are left untouched.
pub fn render_template(content: &str, values: &TemplateValues) -> String {
    let mut rendered = content.to_string();

    if let Some(player_name) = values.player_name.as_deref().filter(|v| !v.is_empty()) {
        rendered = rendered.replace(PLAYER_PLACEHOLDER, player_name);
    }

    if let Some(rank) = values.rank.as_deref().filter(|v| !v.is_empty()) {
        rendered = rendered.replace(RANK_PLACEHOLDER, rank);
    }

    for (index, value) in values.positional.iter().enumerate() {
        rendered = rendered.replace(&format!("{{{}}}", index), value);
    }

    rendered
}
