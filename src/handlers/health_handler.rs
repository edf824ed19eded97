use axum::extract::State;
use serde_json::{json, Value};

use crate::config::{AppState, ResponseDefaults};
use crate::interceptors::ApiResponse;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<Value> {
    let data = json!({
        "status": "ok",
        "version": state.config.app_version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    state
        .responder(ResponseDefaults::BASE)
        .success(Some(data), Some("Service is healthy"), None)
}
