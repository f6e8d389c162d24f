use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{ApiInfoDto, ErrorDto};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static API_TAG: &str = "api";

/// Describe the service and list its endpoint groups.
#[utoipa::path(
    get,
    path = "/api",
    tag = API_TAG,
    responses(
        (status = 200, description = "Service description", body = ApiInfoDto)
    ),
)]
pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfoDto {
        message: "Minecraft server dashboard API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "/api/players".to_string(),
            "/api/groups".to_string(),
            "/api/messages".to_string(),
            "/api/health".to_string(),
            "/api/docs".to_string(),
        ],
    })
}

/// Answer unknown `/api` paths with a JSON 404.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Endpoint not found".to_string(),
        }),
    )
}
