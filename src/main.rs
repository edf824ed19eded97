use shop_response::config::{AppConfig, AppState};
use shop_response::middleware::setup_logging;
use shop_response::routes::create_router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before logging so the level and file are known
    let app_config = AppConfig::from_env()?;

    setup_logging(&app_config);

    tracing::info!("Loaded configuration for environment: {}", app_config.environment);

    if app_config.debug && app_config.is_production() {
        tracing::warn!("DEBUG is set in production; error details stay hidden");
    }

    let app_state = AppState::new(app_config.clone());

    let app = create_router(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = app_config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
