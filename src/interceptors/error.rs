use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

use super::response::Responder;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid envelope field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Error codes for logs and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ConfigError,
    IoError,
    SerializationError,
    InvalidField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
            ErrorCode::InvalidField => "INVALID_FIELD",
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::ConfigError(_) => ErrorCode::ConfigError,
            AppError::IoError(_) => ErrorCode::IoError,
            AppError::SerializationError(_) => ErrorCode::SerializationError,
            AppError::InvalidField { .. } => ErrorCode::InvalidField,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Faults render as a base error envelope, never with details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.error_code().as_str(), "Application error: {:?}", self);

        Responder::default()
            .error::<Value>(
                Some(&self.to_string()),
                Some(self.status_code().as_u16()),
                None,
                None,
            )
            .into_response()
    }
}

// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_is_unprocessable() {
        let err = AppError::InvalidField {
            field: "code",
            reason: "expected an HTTP status code".to_string(),
        };

        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code().as_str(), "INVALID_FIELD");
        assert_eq!(
            err.to_string(),
            "Invalid envelope field `code`: expected an HTTP status code"
        );
    }

    #[test]
    fn serialization_failure_is_internal() {
        let err: AppError = serde_json::from_str::<Value>("{").unwrap_err().into();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), ErrorCode::SerializationError);
    }
}
