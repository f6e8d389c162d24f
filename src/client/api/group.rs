use crate::{
    client::model::error::ApiError,
    model::{
        api::ApiResponse,
        group::{AvailableRankDto, CreateGroupDto, GroupDto, UpdateGroupDto},
    },
};

use super::helper::{
    delete, get, parse_data, parse_envelope, post, put, send_request, serialize_json,
};

/// Get every group ordered by id
pub async fn get_groups() -> Result<Vec<GroupDto>, ApiError> {
    let response = send_request(get("/api/groups")).await?;
    parse_data(response).await
}

/// Create a group
pub async fn create_group(payload: CreateGroupDto) -> Result<ApiResponse<GroupDto>, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/groups").body(body)).await?;
    parse_envelope(response).await
}

/// Update a group
pub async fn update_group(
    id: i32,
    payload: UpdateGroupDto,
) -> Result<ApiResponse<GroupDto>, ApiError> {
    let url = format!("/api/groups/{}", id);
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_envelope(response).await
}

/// Delete a group, rejected by the server while players hold it
pub async fn delete_group(id: i32) -> Result<ApiResponse<GroupDto>, ApiError> {
    let url = format!("/api/groups/{}", id);

    let response = send_request(delete(&url)).await?;
    parse_envelope(response).await
}

/// Get the rank picker entries
pub async fn get_available_ranks() -> Result<Vec<AvailableRankDto>, ApiError> {
    let response = send_request(get("/api/groups/available/ranks")).await?;
    parse_data(response).await
}
