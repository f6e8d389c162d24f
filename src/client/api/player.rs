use crate::{
    client::model::error::ApiError,
    model::{
        api::ApiResponse,
        player::{PlayerDto, PlayerListDto, PlayerRankDto, UpdatePlayerDto, UpdatePlayerRankDto},
    },
};

use super::helper::{
    delete, get, parse_data, parse_envelope, put, send_request, serialize_json,
};

/// Get one page of players, optionally filtered by name and rank
pub async fn get_players(
    page: u64,
    limit: u64,
    search: &str,
    group: &str,
) -> Result<PlayerListDto, ApiError> {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("page", &page.to_string())
        .append_pair("limit", &limit.to_string());
    if !search.trim().is_empty() {
        query.append_pair("search", search.trim());
    }
    if !group.is_empty() {
        query.append_pair("group", group);
    }
    let url = format!("/api/players?{}", query.finish());

    let response = send_request(get(&url)).await?;
    parse_data(response).await
}

/// Rename a player
pub async fn update_player_name(id: i64, name: String) -> Result<ApiResponse<PlayerDto>, ApiError> {
    let url = format!("/api/players/{}", id);
    let payload = UpdatePlayerDto {
        name: Some(name),
        rank: None,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_envelope(response).await
}

/// Apply the rank/tag rule to a player
pub async fn update_player_rank(
    id: i64,
    rank: String,
) -> Result<ApiResponse<PlayerRankDto>, ApiError> {
    let url = format!("/api/players/{}/rank", id);
    let payload = UpdatePlayerRankDto { rank: Some(rank) };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_envelope(response).await
}

/// Delete a player account
pub async fn delete_player(id: i64) -> Result<ApiResponse<PlayerDto>, ApiError> {
    let url = format!("/api/players/{}", id);

    let response = send_request(delete(&url)).await?;
    parse_envelope(response).await
}
