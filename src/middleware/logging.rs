use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Setup logging with console and rolling JSON file output
pub fn setup_logging(config: &AppConfig) {
    let log_file = Path::new(&config.log_file);
    let log_dir = log_file.parent().unwrap_or(Path::new("logs"));

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(log_dir).ok();

    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        log_dir,
        log_file.file_name().unwrap_or(OsStr::new("app.log")),
    );

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        level = %config.log_level,
        environment = %config.environment,
        debug_details = config.debug_details(),
        "Logging initialized"
    );
}
