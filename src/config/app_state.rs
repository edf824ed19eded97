use std::sync::Arc;

use crate::config::{AppConfig, ResponseDefaults};
use crate::interceptors::Responder;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new AppState
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Builder for the given domain defaults with the deployment's debug flag
    pub fn responder(&self, defaults: ResponseDefaults) -> Responder {
        Responder::new(defaults, self.config.debug_details())
    }
}
