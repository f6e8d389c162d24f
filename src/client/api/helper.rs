use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::model::error::ApiError,
    model::api::{ApiResponse, ErrorDto},
};

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(parse_error(status, response).await)
    }
}

/// Parse a success envelope and hand back its payload with the server's message
pub async fn parse_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiResponse<T>, ApiError> {
    let envelope = parse_response::<ApiResponse<T>>(response).await?;

    if envelope.success {
        Ok(envelope)
    } else {
        Err(ApiError {
            status: 500,
            message: envelope
                .message
                .unwrap_or_else(|| "Request was not successful".to_string()),
        })
    }
}

/// Parse a success envelope and keep only its payload
pub async fn parse_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    parse_envelope(response).await.map(|envelope| envelope.data)
}

async fn parse_error(status: u64, response: Response) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Create a GET request
pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Create a POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Create a PUT request with JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

/// Create a DELETE request
pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

/// Percent-encode a single path segment such as a message key
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
