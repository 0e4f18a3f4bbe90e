//! Structured API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error kinds exposed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    Unauthenticated,
    InvalidArgument,
    NotFound,
    Internal,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::InvalidArgument => write!(f, "invalid_argument"),
            Self::NotFound => write!(f, "not_found"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                },
            },
        }
    }

    /// Missing or unverifiable caller identity
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiErrorType::Unauthenticated,
            message,
        )
    }

    /// Malformed or missing input
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidArgument,
            message,
        )
    }

    /// Requested entity does not exist
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFound, message)
    }

    /// Opaque internal failure; carries a generic message only
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::Internal,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Unauthenticated { message } => Self::unauthenticated(message),
            DomainError::InvalidArgument { message } => Self::invalid_argument(message),
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::invalid_argument("Invalid invite token");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidArgument);
        assert_eq!(err.response.error.message, "Invalid invite token");
    }

    #[test]
    fn test_domain_error_conversion() {
        let cases = [
            (
                DomainError::unauthenticated("no caller"),
                StatusCode::UNAUTHORIZED,
                ApiErrorType::Unauthenticated,
            ),
            (
                DomainError::invalid_argument("bad token"),
                StatusCode::BAD_REQUEST,
                ApiErrorType::InvalidArgument,
            ),
            (
                DomainError::not_found("no group"),
                StatusCode::NOT_FOUND,
                ApiErrorType::NotFound,
            ),
            (
                DomainError::internal("oops"),
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorType::Internal,
            ),
        ];

        for (domain_err, status, error_type) in cases {
            let api_err: ApiError = domain_err.into();
            assert_eq!(api_err.status, status);
            assert_eq!(api_err.response.error.error_type, error_type);
        }
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::unauthenticated("Must be authenticated");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"unauthenticated\""));
        assert!(json.contains("Must be authenticated"));
    }

    #[test]
    fn test_error_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ApiErrorType::InvalidArgument).unwrap(),
            "\"invalid_argument\""
        );
        assert_eq!(
            serde_json::to_string(&ApiErrorType::NotFound).unwrap(),
            "\"not_found\""
        );
    }
}
