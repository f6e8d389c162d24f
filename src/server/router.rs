use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        api::{self, API_TAG},
        group::{self, GROUP_TAG},
        health::{self, HEALTH_TAG},
        message::{self, MESSAGE_TAG},
        player::{self, PLAYER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Minecraft Server Dashboard API"),
    tags(
        (name = API_TAG, description = "Service description"),
        (name = PLAYER_TAG, description = "Player accounts of the game server"),
        (name = GROUP_TAG, description = "Rank and tag groups"),
        (name = MESSAGE_TAG, description = "Chat and system message templates"),
        (name = HEALTH_TAG, description = "Service and database status")
    )
)]
struct ApiDoc;

/// Builds the REST API router with its OpenAPI document and Swagger UI.
///
/// Swagger UI is served at `/api/docs`. Unknown `/api` paths answer a JSON 404 through a
/// catch-all route rather than a fallback, since this router is merged into the
/// fullstack router which owns the fallback.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(api::api_info))
        .routes(routes!(health::health))
        .routes(routes!(player::get_players))
        .routes(routes!(
            player::get_player,
            player::update_player,
            player::delete_player
        ))
        .routes(routes!(player::update_player_rank))
        .routes(routes!(group::get_groups, group::create_group))
        .routes(routes!(
            group::get_group,
            group::update_group,
            group::delete_group
        ))
        .routes(routes!(group::get_available_ranks))
        .routes(routes!(message::get_messages, message::create_message))
        .routes(routes!(
            message::get_message,
            message::update_message,
            message::delete_message
        ))
        .routes(routes!(message::get_game_message))
        .routes(routes!(message::get_available_keys))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/api/{*rest}", get(api::not_found).fallback(api::not_found))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;

    use crate::model::api::ErrorDto;

    async fn send(method: &str, uri: &str, body: &'static str) -> (StatusCode, ErrorDto) {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let app = router().with_state(AppState::new(db));

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorDto = serde_json::from_slice(&bytes).unwrap();
        (status, error)
    }

    #[tokio::test]
    async fn non_numeric_player_id_is_json_400() {
        let (status, error) = send("GET", "/api/players/abc", "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!error.error.is_empty());
    }

    #[tokio::test]
    async fn null_rank_is_rejected_as_required() {
        let (status, error) = send("PUT", "/api/players/1/rank", r#"{"rank":null}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "Rank is required");
    }

    #[tokio::test]
    async fn missing_rank_is_rejected_as_required() {
        let (status, error) = send("PUT", "/api/players/1/rank", "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "Rank is required");
    }

    #[tokio::test]
    async fn malformed_group_body_is_json_400() {
        let (status, error) = send("POST", "/api/groups", "{bad").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!error.error.is_empty());
    }

    #[tokio::test]
    async fn mistyped_message_body_is_json_400() {
        let (status, _) = send("POST", "/api/messages", r#"{"message_key":5}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_page_is_json_400() {
        let (status, _) = send("GET", "/api/players?page=first", "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404() {
        let (status, error) = send("GET", "/api/nothing/here", "").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!error.error.is_empty());
    }
}
