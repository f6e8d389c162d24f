use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        group::{AvailableRankDto, CreateGroupDto, GroupDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath},
        model::group::{CreateGroupParams, Group, UpdateGroupParams},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

fn require_names(internal_name: &str, display_name: &str) -> Result<(), AppError> {
    if internal_name.trim().is_empty() || display_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Internal name and display name are required".to_string(),
        ));
    }
    Ok(())
}

/// List every group.
///
/// # Returns
/// - `200 OK` - Groups ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved groups", body = ApiResponse<Vec<GroupDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let groups = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            groups.into_iter().map(Group::into_dto).collect::<Vec<_>>(),
        )),
    ))
}

/// Get a group by ID.
///
/// # Returns
/// - `200 OK` - The group
/// - `404 Not Found` - No group has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = ApiResponse<GroupDto>),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(group.into_dto()))))
}

/// Create a group.
///
/// Missing optional fields are stored as empty strings.
///
/// # Returns
/// - `201 Created` - The stored group
/// - `400 Bad Request` - Missing names or internal name already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = ApiResponse<GroupDto>),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    require_names(&payload.internal_name, &payload.display_name)?;

    let service = GroupService::new(&state.db);

    let group = service.create(CreateGroupParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(group.into_dto()).with_message("Group created")),
    ))
}

/// Update a group.
///
/// # Returns
/// - `200 OK` - The updated group
/// - `400 Bad Request` - Missing names or internal name held by another group
/// - `404 Not Found` - No group has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = ApiResponse<GroupDto>),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    require_names(&payload.internal_name, &payload.display_name)?;

    let service = GroupService::new(&state.db);

    let group = service
        .update(UpdateGroupParams::from_dto(id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(group.into_dto()).with_message("Group updated")),
    ))
}

/// Delete a group.
///
/// Refused while any account holds the group as its rank.
///
/// # Returns
/// - `200 OK` - The deleted group
/// - `400 Bad Request` - Players still use the group
/// - `404 Not Found` - No group has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted group", body = ApiResponse<GroupDto>),
        (status = 400, description = "Group is still in use", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(group.into_dto()).with_message("Group deleted")),
    ))
}

/// List the groups a player can be assigned, for rank pickers.
///
/// # Returns
/// - `200 OK` - Ranks ordered by group ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/groups/available/ranks",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved available ranks", body = ApiResponse<Vec<AvailableRankDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_ranks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let ranks = service
        .get_all()
        .await?
        .into_iter()
        .map(Group::into_available_rank_dto)
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(ApiResponse::ok(ranks))))
}
