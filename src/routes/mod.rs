use axum::{routing::get, Router};

use crate::config::AppState;
use crate::handlers::health_check;

/// Create the service router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}
