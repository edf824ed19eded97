pub mod error;
pub mod pagination;
pub mod response;

pub use error::{AppError, AppResult, ErrorCode};
pub use pagination::{Page, PageQuery, PageRequest, PageWindow, Pagination, Paginator};
pub use response::{ApiResponse, FieldErrors, Responder, ValidationFailure};
