use crate::{
    client::model::error::ApiError,
    model::{
        api::ApiResponse,
        message::{
            CreateMessageDto, GameMessageDto, MessageDto, MessageKeyDto, TemplateValues,
            UpdateMessageDto,
        },
    },
};

use super::helper::{
    delete, encode_segment, get, parse_data, parse_envelope, post, put, send_request,
    serialize_json,
};

/// Get every message ordered by key
pub async fn get_messages() -> Result<Vec<MessageDto>, ApiError> {
    let response = send_request(get("/api/messages")).await?;
    parse_data(response).await
}

/// Create a message
pub async fn create_message(
    payload: CreateMessageDto,
) -> Result<ApiResponse<MessageDto>, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/messages").body(body)).await?;
    parse_envelope(response).await
}

/// Update the content and description of a message
pub async fn update_message(
    key: &str,
    payload: UpdateMessageDto,
) -> Result<ApiResponse<MessageDto>, ApiError> {
    let url = format!("/api/messages/{}", encode_segment(key));
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_envelope(response).await
}

/// Delete a message
pub async fn delete_message(key: &str) -> Result<ApiResponse<MessageDto>, ApiError> {
    let url = format!("/api/messages/{}", encode_segment(key));

    let response = send_request(delete(&url)).await?;
    parse_envelope(response).await
}

/// Render a message server-side the way the game would show it
///
/// Positional values are sent after the named ones so the server assigns
/// `{0}`, `{1}`, ... in the order given here.
pub async fn get_game_message(
    key: &str,
    values: &TemplateValues,
) -> Result<GameMessageDto, ApiError> {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(player_name) = values.player_name.as_deref().filter(|v| !v.is_empty()) {
        query.append_pair("player_name", player_name);
    }
    if let Some(rank) = values.rank.as_deref().filter(|v| !v.is_empty()) {
        query.append_pair("rank", rank);
    }
    for (index, value) in values.positional.iter().enumerate() {
        query.append_pair(&format!("arg{}", index), value);
    }
    let url = format!(
        "/api/messages/game/{}?{}",
        encode_segment(key),
        query.finish()
    );

    let response = send_request(get(&url)).await?;
    parse_data(response).await
}

/// Get every message key with its description
pub async fn get_available_keys() -> Result<Vec<MessageKeyDto>, ApiError> {
    let response = send_request(get("/api/messages/available/keys")).await?;
    parse_data(response).await
}
