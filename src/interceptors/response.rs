use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{AppError, AppResult};
use super::pagination::{Page, PageRequest, Paginator};
use crate::config::ResponseDefaults;

/// Field name to human readable messages, as rendered under `data.errors`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const PAGINATE_MESSAGE: &str = "page retrieved successfully";
pub const CREATED_MESSAGE: &str = "created successfully";
pub const NOT_FOUND_MESSAGE: &str = "resource not found";
pub const VALIDATION_MESSAGE: &str = "parameter validation failed";

/// Standard response envelope
///
/// ```json
/// { "code": 200, "message": "...", "data": null, "success": true }
/// ```
///
/// `details` only appears on error envelopes built in debug mode, `extra`
/// holds top-level fields added through [`Responder::custom_response`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of a validation error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub errors: FieldErrors,
}

impl<T> ApiResponse<T> {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = match StatusCode::from_u16(self.code) {
            Ok(status) => status,
            Err(_) => {
                tracing::warn!(code = self.code, "Envelope code is not a valid HTTP status");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::warn!(code = self.code, message = %self.message, "Rendering server error envelope");
        } else {
            tracing::debug!(code = self.code, success = self.success, "Rendering envelope");
        }

        (status, Json(self)).into_response()
    }
}

/// Builds envelopes from a set of domain defaults.
///
/// `debug` decides whether error `details` may reach the client and is
/// injected by the caller, usually from [`crate::config::AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responder {
    defaults: ResponseDefaults,
    debug: bool,
}

impl Responder {
    pub const fn new(defaults: ResponseDefaults, debug: bool) -> Self {
        Self { defaults, debug }
    }

    /// Success envelope. Missing, empty or zero arguments take the defaults.
    pub fn success<T>(
        &self,
        data: Option<T>,
        message: Option<&str>,
        code: Option<u16>,
    ) -> ApiResponse<T> {
        self.envelope(true, data, message, code)
    }

    /// Error envelope. `details` is dropped unless debug is on and it holds
    /// something.
    pub fn error<T>(
        &self,
        message: Option<&str>,
        code: Option<u16>,
        details: Option<Value>,
        data: Option<T>,
    ) -> ApiResponse<T> {
        let mut response = self.envelope(false, data, message, code);
        response.details = self.visible_details(details);
        response
    }

    /// Page through `items`, rendering each one as is.
    pub fn paginate<'a, T: Serialize>(
        &self,
        items: &'a [T],
        request: PageRequest,
        message: Option<&str>,
        code: Option<u16>,
    ) -> ApiResponse<Page<&'a T>> {
        self.paginate_with(items, request, message, code, |item| item)
    }

    /// Page through `items`, rendering each one through `serializer`.
    pub fn paginate_with<'a, T, U, F>(
        &self,
        items: &'a [T],
        request: PageRequest,
        message: Option<&str>,
        code: Option<u16>,
        serializer: F,
    ) -> ApiResponse<Page<U>>
    where
        F: Fn(&'a T) -> U,
    {
        let window = Paginator::new(items.len(), request.page_size).page(request.page);
        let page = Page {
            items: items[window.range()].iter().map(serializer).collect(),
            pagination: window.pagination,
        };

        self.success(
            Some(page),
            Some(non_empty(message).unwrap_or(PAGINATE_MESSAGE)),
            code,
        )
    }

    pub fn created<T>(&self, data: Option<T>, message: Option<&str>) -> ApiResponse<T> {
        self.success(
            data,
            Some(non_empty(message).unwrap_or(CREATED_MESSAGE)),
            Some(201),
        )
    }

    pub fn not_found(&self, message: Option<&str>, details: Option<Value>) -> ApiResponse {
        self.error(
            Some(non_empty(message).unwrap_or(NOT_FOUND_MESSAGE)),
            Some(404),
            details,
            None,
        )
    }

    pub fn validation_error(
        &self,
        errors: FieldErrors,
        message: Option<&str>,
    ) -> ApiResponse<ValidationFailure> {
        self.error(
            Some(non_empty(message).unwrap_or(VALIDATION_MESSAGE)),
            Some(422),
            None,
            Some(ValidationFailure { errors }),
        )
    }

    /// Envelope with arbitrary extra top-level fields.
    ///
    /// Extras are merged last, so an extra named `code`, `message`, `data`
    /// or `success` replaces the standard value. A reserved extra of the
    /// wrong JSON type is rejected.
    pub fn custom_response(
        &self,
        success: bool,
        data: Option<Value>,
        message: Option<&str>,
        code: Option<u16>,
        extra: Map<String, Value>,
    ) -> AppResult<ApiResponse> {
        let mut response = self.envelope(success, data, message, code);

        for (key, value) in extra {
            match key.as_str() {
                "code" => {
                    response.code = value
                        .as_u64()
                        .and_then(|code| u16::try_from(code).ok())
                        .ok_or_else(|| invalid_field("code", "an HTTP status code"))?;
                }
                "message" => {
                    response.message = value
                        .as_str()
                        .ok_or_else(|| invalid_field("message", "a string"))?
                        .to_string();
                }
                "success" => {
                    response.success = value
                        .as_bool()
                        .ok_or_else(|| invalid_field("success", "a boolean"))?;
                }
                "data" => response.data = Some(value),
                "details" => response.details = self.visible_details(Some(value)),
                _ => {
                    response.extra.insert(key, value);
                }
            }
        }

        Ok(response)
    }

    fn envelope<T>(
        &self,
        success: bool,
        data: Option<T>,
        message: Option<&str>,
        code: Option<u16>,
    ) -> ApiResponse<T> {
        ApiResponse {
            code: code
                .filter(|code| *code != 0)
                .unwrap_or_else(|| self.defaults.code_for(success)),
            message: non_empty(message)
                .unwrap_or_else(|| self.defaults.message_for(success))
                .to_string(),
            data,
            success,
            details: None,
            extra: Map::new(),
        }
    }

    fn visible_details(&self, details: Option<Value>) -> Option<Value> {
        details.filter(|details| self.debug && !is_blank(details))
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(ResponseDefaults::BASE, false)
    }
}

fn non_empty(message: Option<&str>) -> Option<&str> {
    message.filter(|message| !message.is_empty())
}

fn invalid_field(field: &'static str, expected: &'static str) -> AppError {
    AppError::InvalidField {
        field,
        reason: format!("expected {expected}"),
    }
}

/// `null`, `false`, `0` and empty strings, arrays or objects carry nothing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
