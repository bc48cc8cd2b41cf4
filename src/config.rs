use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_ERROR_BANNER_MS, DEFAULT_TOKEN_STORAGE_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// How long the invalid-credentials banner stays up (ms)
    pub error_banner_ms: u32,
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            error_banner_ms: DEFAULT_ERROR_BANNER_MS,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables (see build.rs)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            error_banner_ms: option_env!("ERROR_BANNER_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.error_banner_ms),
            token_storage_key: option_env!("TOKEN_STORAGE_KEY")
                .map(|s| s.to_string())
                .unwrap_or(defaults.token_storage_key),
        }
    }

    /// Base URL without a trailing slash, ready to have endpoint paths appended
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
