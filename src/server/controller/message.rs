use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        message::{
            CreateMessageDto, GameMessageDto, MessageDto, MessageKeyDto, TemplateValues,
            UpdateMessageDto,
        },
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
        model::message::{CreateMessageParams, Message, UpdateMessageParams},
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Splits game query parameters into named and positional placeholder values.
///
/// `player_name` and `rank` are named; every other parameter, in request order,
/// fills `{0}`, `{1}`, ...
fn template_values(query: Vec<(String, String)>) -> TemplateValues {
    let mut values = TemplateValues::default();

    for (key, value) in query {
        match key.as_str() {
            "player_name" => values.player_name = Some(value),
            "rank" => values.rank = Some(value),
            _ => values.positional.push(value),
        }
    }

    values
}

/// List every message template.
///
/// # Returns
/// - `200 OK` - Messages ordered by key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved messages", body = ApiResponse<Vec<MessageDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let messages = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            messages.into_iter().map(Message::into_dto).collect::<Vec<_>>(),
        )),
    ))
}

/// Get a message template by key.
///
/// # Returns
/// - `200 OK` - The message
/// - `404 Not Found` - No message has this key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages/{key}",
    tag = MESSAGE_TAG,
    params(
        ("key" = String, Path, description = "Message key")
    ),
    responses(
        (status = 200, description = "Successfully retrieved message", body = ApiResponse<MessageDto>),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let message = service.get_by_key(&key).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(message.into_dto()))))
}

/// Create a message template.
///
/// # Returns
/// - `201 Created` - The stored message
/// - `400 Bad Request` - Missing key or content, or key already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Successfully created message", body = ApiResponse<MessageDto>),
        (status = 400, description = "Invalid message data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.message_key.trim().is_empty() || payload.content.is_empty() {
        return Err(AppError::BadRequest(
            "Message key and content are required".to_string(),
        ));
    }

    let service = MessageService::new(&state.db);

    let message = service
        .create(CreateMessageParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(message.into_dto()).with_message("Message created")),
    ))
}

/// Update the content and description of a message template.
///
/// # Returns
/// - `200 OK` - The updated message
/// - `400 Bad Request` - Missing content
/// - `404 Not Found` - No message has this key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/messages/{key}",
    tag = MESSAGE_TAG,
    params(
        ("key" = String, Path, description = "Message key")
    ),
    request_body = UpdateMessageDto,
    responses(
        (status = 200, description = "Successfully updated message", body = ApiResponse<MessageDto>),
        (status = 400, description = "Invalid message data", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_message(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.content.is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }

    let service = MessageService::new(&state.db);

    let message = service
        .update(UpdateMessageParams::from_dto(key, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(message.into_dto()).with_message("Message updated")),
    ))
}

/// Delete a message template.
///
/// # Returns
/// - `200 OK` - The deleted message
/// - `404 Not Found` - No message has this key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/messages/{key}",
    tag = MESSAGE_TAG,
    params(
        ("key" = String, Path, description = "Message key")
    ),
    responses(
        (status = 200, description = "Successfully deleted message", body = ApiResponse<MessageDto>),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let message = service.delete(&key).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(message.into_dto()).with_message("Message deleted")),
    ))
}

/// Render a message template for use in game.
///
/// Used by game-server plugins. `player_name` replaces `%%s`, `rank` replaces `{rank}`,
/// and any other query parameter fills `{0}`, `{1}`, ... in the order given.
///
/// # Returns
/// - `200 OK` - Rendered and original content
/// - `404 Not Found` - No message has this key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages/game/{key}",
    tag = MESSAGE_TAG,
    params(
        ("key" = String, Path, description = "Message key"),
        ("player_name" = Option<String>, Query, description = "Replaces every %%s"),
        ("rank" = Option<String>, Query, description = "Replaces every {rank}")
    ),
    responses(
        (status = 200, description = "Successfully rendered message", body = ApiResponse<GameMessageDto>),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_message(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
    ApiQuery(query): ApiQuery<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let rendered = service
        .render_for_game(&key, &template_values(query))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(rendered))))
}

/// List the available message keys with their descriptions.
///
/// # Returns
/// - `200 OK` - Keys in alphabetical order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages/available/keys",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved message keys", body = ApiResponse<Vec<MessageKeyDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_keys(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);

    let keys = service
        .get_all()
        .await?
        .into_iter()
        .map(Message::into_key_dto)
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(ApiResponse::ok(keys))))
}
