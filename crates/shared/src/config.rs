//! Application configuration management.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::AppError;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream salon API configuration.
    pub upstream: UpstreamConfig,
    /// Report computation settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Upstream salon API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the REST API, e.g. `https://api.example.org/api`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Records requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Upper bound on pages fetched for one list.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_page_size() -> u32 {
    100
}

fn default_max_pages() -> u32 {
    50
}

/// Report computation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// IANA timezone that defines calendar-day boundaries.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Currency reported when records do not carry one.
    #[serde(default)]
    pub currency: Currency,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            currency: Currency::default(),
        }
    }
}

fn default_timezone() -> String {
    "Africa/Kigali".to_string()
}

impl ReportConfig {
    /// Parses the configured timezone.
    pub fn tz(&self) -> Result<Tz, AppError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| AppError::Config(format!("invalid timezone {}: {e}", self.timezone)))
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SALONLEDGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
