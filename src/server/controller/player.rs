use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        player::{PlayerDto, PlayerListDto, PlayerRankDto, UpdatePlayerDto, UpdatePlayerRankDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
        model::player::{PlayerFilter, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerListParams {
    /// Page number starting at 1 (default: 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Players per page (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Substring of the player name or identifier
    #[serde(default)]
    pub search: Option<String>,
    /// Exact rank to filter by
    #[serde(default)]
    pub group: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// List players with pagination, search and rank filter.
///
/// Players are ordered by most recent login. The response also lists every rank
/// currently held by an account, for the filter dropdown.
///
/// # Returns
/// - `200 OK` - One page of players
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(PlayerListParams),
    responses(
        (status = 200, description = "Successfully retrieved players", body = ApiResponse<PlayerListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PlayerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let filter = PlayerFilter {
        search: params.search,
        rank: params.group,
    };
    let players = service
        .get_paginated(filter, params.page, params.limit)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(players.into_dto()))))
}

/// Get a player by identifier.
///
/// # Returns
/// - `200 OK` - The player
/// - `404 Not Found` - No account has this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Account identifier (created column)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = ApiResponse<PlayerDto>),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let player = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(player.into_dto()))))
}

/// Update the name and/or rank of a player.
///
/// The rank is stored verbatim; use the rank endpoint to apply tag resolution.
///
/// # Returns
/// - `200 OK` - The updated player
/// - `400 Bad Request` - Neither name nor rank given
/// - `404 Not Found` - No account has this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Account identifier (created column)")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = ApiResponse<PlayerDto>),
        (status = 400, description = "No fields to update", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let player = service
        .update(UpdatePlayerParams {
            id,
            name: payload.name,
            rank: payload.rank,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(player.into_dto()).with_message("Player updated")),
    ))
}

/// Assign a rank or tag to a player.
///
/// Hard ranks and regular groups set both `rank` and `tag`. Groups whose permissions
/// start with `tag.` only change the tag. Unknown names are stored as given.
///
/// # Returns
/// - `200 OK` - The stored rank and tag
/// - `400 Bad Request` - Missing rank
/// - `404 Not Found` - No account has this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/players/{id}/rank",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Account identifier (created column)")
    ),
    request_body = UpdatePlayerRankDto,
    responses(
        (status = 200, description = "Successfully updated rank and tag", body = ApiResponse<PlayerRankDto>),
        (status = 400, description = "Missing rank", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player_rank(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdatePlayerRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let requested = payload.rank.as_deref().unwrap_or_default();
    let result = service.update_rank(id, requested).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(result.into_dto()).with_message("Rank and tag updated")),
    ))
}

/// Delete a player account.
///
/// # Returns
/// - `200 OK` - The deleted player
/// - `404 Not Found` - No account has this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Account identifier (created column)")
    ),
    responses(
        (status = 200, description = "Successfully deleted player", body = ApiResponse<PlayerDto>),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let player = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(player.into_dto()).with_message("Player deleted")),
    ))
}
