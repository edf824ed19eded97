use validator::{Validate, ValidationErrors};

use crate::interceptors::FieldErrors;

/// Validate a request struct using validator, collecting messages per field
pub fn validate_request<T: Validate>(request: &T) -> Result<(), FieldErrors> {
    request.validate().map_err(|e| field_errors(&e))
}

/// Flatten validator output into the `data.errors` shape.
///
/// Rules without a message contribute their rule code instead.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
