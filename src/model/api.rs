use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

/// Envelope wrapping every successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HealthDto {
    /// `online` when the database answered a ping, `offline` otherwise.
    pub status: String,
    /// `connected` or `disconnected`.
    pub database: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthDto {
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApiInfoDto {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_missing_message() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();

        assert_eq!(json, serde_json::json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn envelope_carries_message() {
        let json = serde_json::to_value(ApiResponse::ok("Admin").with_message("Group created"))
            .unwrap();

        assert_eq!(json["message"], "Group created");
        assert_eq!(json["data"], "Admin");
    }

    #[test]
    fn error_body_uses_error_field() {
        let body: ErrorDto = serde_json::from_str(r#"{"error":"Group not found"}"#).unwrap();

        assert_eq!(body.error, "Group not found");
    }
}
