use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

/// Settings read once at startup. Environment variable names are the
/// upper-cased field names (`MONGO_URI`, `REDIS_URL`, `PORT`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub mongo_uri: String,
    pub redis_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Single origin allowed to make cross-origin requests.
    #[serde(default)]
    pub frontend_url: Option<String>,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Collector for span export; unset disables it.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_port() -> u16 {
    4000
}

fn default_service_name() -> String {
    "backend".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl BackendConfig {
    pub fn load() -> Result<Self, AppError> {
        core_config::load()
    }

    pub fn from_environment(environment: config::Environment) -> Result<Self, AppError> {
        core_config::from_environment(environment)
    }

    /// The configured frontend origin, treating an empty value as unset.
    pub fn allowed_origin(&self) -> Option<&str> {
        self.frontend_url
            .as_deref()
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }

    /// Same as `otlp_endpoint`, treating an empty value as unset.
    pub fn otlp_endpoint(&self) -> Option<&str> {
        self.otlp_endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.is_empty())
    }
}
