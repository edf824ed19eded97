pub mod validation;

pub use validation::{field_errors, validate_request};
