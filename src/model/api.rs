use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `null` on errors.
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: error.into(),
        }
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

/// Success envelope wrapping every response payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            pagination: None,
            message: None,
        }
    }

    pub fn paginated(data: T, pagination: PaginationDto) -> Self {
        Self {
            data,
            pagination: Some(pagination),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
