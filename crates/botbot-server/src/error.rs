//! Error handling for the webhook server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from botbot-core errors
impl From<botbot_core::BotBotError> for ApiError {
    fn from(err: botbot_core::BotBotError) -> Self {
        use botbot_core::BotBotError;

        // Only the directory is touched while serving; the rest are startup faults.
        match err {
            BotBotError::Database { message, code, .. } => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                code.as_str(),
                format!("Database error: {}", message),
            ),
            other => ApiError::internal(other.to_string()),
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use botbot_core::BotBotError;

    #[test]
    fn test_database_error_keeps_code() {
        let err: ApiError = BotBotError::database("locked").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "DB_002");
        assert!(err.message.contains("locked"));
    }

    #[test]
    fn test_startup_faults_are_internal() {
        let err: ApiError = BotBotError::Configuration("bad".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "INTERNAL_ERROR");
        assert!(err.message.contains("bad"));
    }

    #[test]
    fn test_unauthorized_response_body() {
        let err = ApiError::unauthorized("invalid webhook token");
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "[401 Unauthorized] UNAUTHORIZED: invalid webhook token");
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
