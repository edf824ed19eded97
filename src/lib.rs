//! Standardized JSON response envelopes for the shop API.
//!
//! Every response shares the shape
//! `{ "code", "message", "data", "success", ["details"] }` and its HTTP
//! status equals `code`. [`interceptors::Responder`] builds envelopes from a
//! [`config::ResponseDefaults`] record; [`domains`] holds the per-module
//! records and fixed-shape helpers.

pub mod config;
pub mod domains;
pub mod handlers;
pub mod interceptors;
pub mod middleware;
pub mod routes;
pub mod utils;

pub use config::{AppConfig, AppState, ResponseDefaults};
pub use interceptors::{ApiResponse, AppError, AppResult, PageRequest, Responder};
