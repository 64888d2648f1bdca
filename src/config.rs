//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::analytics::DateLocale;
use crate::catalog::Catalog;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,

    #[serde(default)]
    pub catalog: Catalog,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins for the JSON API; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Analytics endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Locale for chart date labels
    #[serde(default)]
    pub locale: DateLocale,

    /// Optional request timeout; unset means wait for the endpoint
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

fn default_endpoint_url() -> String {
    "https://functions.poehali.dev/ee0e957d-84aa-4d51-bb50-8a4b684d41f4".to_string()
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            locale: DateLocale::default(),
            request_timeout_ms: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse TOML config content
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load from the first readable default location, then apply
    /// environment overrides.
    ///
    /// Nothing is logged here because tracing is not set up yet; call
    /// [`LoadReport::log`] once it is.
    pub fn load_default() -> (Self, LoadReport) {
        let paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("barbershop").join("config.toml")),
            Some(PathBuf::from("/etc/barbershop/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&paths, |key| std::env::var(key).ok())
    }

    fn load_first(paths: &[PathBuf], var: impl Fn(&str) -> Option<String>) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let mut loaded = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    report.source = Some(path.clone());
                    loaded = Some(config);
                    break;
                }
                Err(e) => report.warnings.push(e.to_string()),
            }
        }

        let mut config = loaded.unwrap_or_default();
        report.warnings.extend(config.apply_overrides(var));
        (config, report)
    }

    /// Apply `BARBERSHOP_*` overrides. Returns a warning for every value
    /// that was ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        // Server overrides
        if let Some(host) = var("BARBERSHOP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("BARBERSHOP_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid BARBERSHOP_PORT: {port}")),
            }
        }

        // Analytics overrides
        if let Some(url) = var("BARBERSHOP_ANALYTICS_URL") {
            self.analytics.endpoint_url = url;
        }
        if let Some(locale) = var("BARBERSHOP_LOCALE") {
            match locale.parse() {
                Ok(l) => self.analytics.locale = l,
                Err(e) => warnings.push(format!("Ignoring BARBERSHOP_LOCALE: {e}")),
            }
        }

        // Logging overrides
        if let Some(level) = var("BARBERSHOP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("BARBERSHOP_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }
}

/// What [`Config::load_default`] did
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Unreadable files and ignored overrides
    pub warnings: Vec<String>,
}

impl LoadReport {
    /// Emit the report. Call after the subscriber is installed.
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Barbershop Configuration
#
# Environment variables override these settings:
# - BARBERSHOP_HOST
# - BARBERSHOP_PORT
# - BARBERSHOP_ANALYTICS_URL
# - BARBERSHOP_LOCALE
# - BARBERSHOP_LOG_LEVEL
# - BARBERSHOP_LOG_FORMAT

[server]
# Web server host
host = "0.0.0.0"

# Web server port
port = 8080

# Allowed CORS origins for /api/v1 (empty = any origin)
cors_origins = []

[analytics]
# Analytics function endpoint (GET, returns the aggregated JSON snapshot)
endpoint_url = "https://functions.poehali.dev/ee0e957d-84aa-4d51-bb50-8a4b684d41f4"

# Date label locale for charts: "ru-RU" (dd.mm) or "en-US" (mm/dd)
locale = "ru-RU"

# Optional request timeout in milliseconds (unset = no timeout)
# request_timeout_ms = 10000

# [catalog]
# Services, stylists and time slots default to the built-in shop data.
# time_slots = ["10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00", "20:00"]
#
# [[catalog.services]]
# id = 1
# name = "Классическая стрижка"
# price = "1500₽"
# duration = "45 мин"
# icon = "Scissors"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
