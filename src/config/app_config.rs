use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
    /// Requested exposure of error details; see [`AppConfig::debug_details`].
    pub debug: bool,
    pub log_level: String,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(Self::from_config(&cfg))
    }

    /// Read settings from an already built source, falling back to defaults.
    pub fn from_config(cfg: &config::Config) -> Self {
        let environment = cfg
            .get_string("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string());
        let debug = cfg
            .get_bool("DEBUG")
            .unwrap_or(environment == "development");

        Self {
            host: cfg.get_string("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: cfg
                .get_int("PORT")
                .ok()
                .and_then(|port| u16::try_from(port).ok())
                .unwrap_or(3000),
            environment,
            app_name: cfg.get_string("APP_NAME").unwrap_or_else(|_| "shop-response".to_string()),
            app_version: cfg.get_string("APP_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            debug,
            log_level: cfg.get_string("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_file: cfg.get_string("LOG_FILE").unwrap_or_else(|_| "logs/app.log".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Whether error envelopes may carry `details`. Never true in production.
    pub fn debug_details(&self) -> bool {
        self.debug && !self.is_production()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
