use crate::{client::model::error::ApiError, model::api::HealthDto};

use super::helper::{get, parse_response, send_request};

/// Get API and database status
pub async fn get_health() -> Result<HealthDto, ApiError> {
    let response = send_request(get("/api/health")).await?;
    parse_response(response).await
}
