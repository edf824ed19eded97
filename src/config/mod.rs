pub mod app_config;
pub mod app_state;
pub mod response_defaults;

pub use app_config::AppConfig;
pub use app_state::AppState;
pub use response_defaults::ResponseDefaults;
