use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use dioxus_logger::tracing;

use crate::{model::api::HealthDto, server::state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report API and database availability.
///
/// Always answers 200; a failed database ping is reported in the body.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service status", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let connected = match state.db.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("Database ping failed: {}", err);
            false
        }
    };

    let (status, database) = if connected {
        ("online", "connected")
    } else {
        ("offline", "disconnected")
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            status: status.to_string(),
            database: database.to_string(),
            timestamp: Utc::now(),
        }),
    )
}
